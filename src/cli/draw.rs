//! Draw command implementation.
//!
//! Builds a batch from the input rows and writes the plot document to stdout
//! or a file. Rows that fail are reported and left out; bad bounds stop the
//! draw before anything is written.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::engine::{draw, format_cursor, Canvas, JsonEngine};
use crate::error::{FplotError, Result};
use crate::formula::{build_batch, BatchOutcome};
use crate::output::{display_path, plural, Printer};

use super::input::InputArgs;

/// Build a plot from formulas and write the plot document
#[derive(Args, Debug)]
pub struct DrawArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the plot document to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Draw without the background grid
    #[arg(long)]
    pub no_grid: bool,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let input = args.input.resolve(printer)?;
    let outcome = build_batch(&input.rows, &input.x, &input.y)?;

    for failure in &outcome.failures {
        printer.warning("Skipping", &failure.to_string());
    }

    let mut canvas = input.session.canvas();
    apply_canvas_args(&args, &mut canvas);

    let (x, y) = (outcome.batch.x_range, outcome.batch.y_range);
    printer.info(
        "Viewport",
        &format!("{} to {}", format_cursor(x.min, y.min), format_cursor(x.max, y.max)),
    );

    match &args.output {
        Some(path) => {
            // Render fully before touching the file so a rejected batch
            // leaves the previous document in place
            let mut engine = JsonEngine::new(canvas, Vec::new());
            draw(&mut engine, &outcome)?;
            fs::write(path, engine.into_inner()).map_err(|e| FplotError::Io {
                path: path.clone(),
                message: format!("Failed to write output file: {}", e),
            })?;
            printer.status("Wrote", &display_path(path));
        }
        None => {
            let mut engine = JsonEngine::new(canvas, io::stdout().lock());
            draw(&mut engine, &outcome)?;
        }
    }

    printer.status("Plotted", &plotted_summary(&outcome));
    Ok(())
}

fn apply_canvas_args(args: &DrawArgs, canvas: &mut Canvas) {
    if let Some(width) = args.width {
        canvas.width = width;
    }
    if let Some(height) = args.height {
        canvas.height = height;
    }
    if args.no_grid {
        canvas.grid = false;
    }
}

fn plotted_summary(outcome: &BatchOutcome) -> String {
    if outcome.all_failed() {
        return format!("nothing ({} skipped)", outcome.failures.len());
    }
    let plotted = plural(outcome.batch.len(), "formula", "formulas");
    if outcome.has_failures() {
        format!("{} ({} skipped)", plotted, outcome.failures.len())
    } else {
        plotted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(formulas: &[&str], output: PathBuf) -> DrawArgs {
        DrawArgs {
            input: InputArgs {
                formulas: formulas.iter().map(|s| s.to_string()).collect(),
                x_min: Some("-10".to_string()),
                x_max: Some("10".to_string()),
                y_min: Some("-10".to_string()),
                y_max: Some("10".to_string()),
                session: Some(output.with_file_name("none.yaml")),
                ..Default::default()
            },
            output: Some(output),
            width: Some(640),
            height: None,
            no_grid: true,
        }
    }

    fn empty_session(dir: &std::path::Path) {
        std::fs::write(dir.join("none.yaml"), "").unwrap();
    }

    #[test]
    fn test_draw_writes_document() {
        let dir = tempdir().unwrap();
        empty_session(dir.path());
        let out = dir.path().join("plot.json");

        run(args(&["sinx", "a=b=c", "x^2 + y^2 = 9"], out.clone()), &Printer::plain()).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let data = parsed["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["fn"], "sin(x)");
        assert_eq!(data[1]["fnType"], "implicit");
        assert_eq!(parsed["width"], 640);
        assert_eq!(parsed["grid"], false);
    }

    #[test]
    fn test_draw_rejects_bad_range() {
        let dir = tempdir().unwrap();
        empty_session(dir.path());
        let out = dir.path().join("plot.json");

        let mut draw_args = args(&["sinx"], out.clone());
        draw_args.input.x_min = Some("5".to_string());
        draw_args.input.x_max = Some("5".to_string());

        let err = run(draw_args, &Printer::plain()).unwrap_err();
        assert!(err.is_range());
        assert!(!out.exists());
    }

    #[test]
    fn test_plotted_summary() {
        let dir = tempdir().unwrap();
        empty_session(dir.path());
        let draw_args = args(&["sinx", "a=b=c"], dir.path().join("p.json"));
        let input = draw_args.input.resolve(&Printer::plain()).unwrap();
        let outcome = build_batch(&input.rows, &input.x, &input.y).unwrap();

        assert_eq!(plotted_summary(&outcome), "1 formula (1 skipped)");

        let draw_args = args(&["a=b=c", "y <= x"], dir.path().join("p.json"));
        let input = draw_args.input.resolve(&Printer::plain()).unwrap();
        let outcome = build_batch(&input.rows, &input.x, &input.y).unwrap();
        assert_eq!(plotted_summary(&outcome), "nothing (2 skipped)");
    }

    #[test]
    fn test_engine_failure_keeps_previous_output() {
        let dir = tempdir().unwrap();
        empty_session(dir.path());
        let out = dir.path().join("plot.json");
        std::fs::write(&out, "{\"previous\": true}").unwrap();

        let err = run(args(&["sin(x"], out.clone()), &Printer::plain()).unwrap_err();
        assert!(matches!(err, FplotError::Render { .. }));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "{\"previous\": true}");
    }
}
