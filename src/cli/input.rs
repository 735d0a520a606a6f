//! Formula and bound arguments shared by `draw` and `check`.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::session::Session;
use crate::types::{AxisBounds, Colour, RawEntry};

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Formulas, one per row (replaces the session's rows)
    pub formulas: Vec<String>,

    /// Colour for each formula, in order (defaults cycle through a palette)
    #[arg(long = "color", short = 'c', value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Lower X bound
    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<String>,

    /// Upper X bound
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<String>,

    /// Lower Y bound
    #[arg(long, allow_hyphen_values = true)]
    pub y_min: Option<String>,

    /// Upper Y bound
    #[arg(long, allow_hyphen_values = true)]
    pub y_max: Option<String>,

    /// Session file (default: ./fplot.yaml when present)
    #[arg(long, short)]
    pub session: Option<PathBuf>,
}

/// Rows and bounds ready for the pipeline.
#[derive(Debug)]
pub struct PlotInput {
    pub rows: Vec<RawEntry>,
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub session: Session,
}

impl InputArgs {
    /// Merge command-line values over the session file.
    pub fn resolve(&self, printer: &Printer) -> Result<PlotInput> {
        let session = self.load_session(printer)?;

        let rows = if self.formulas.is_empty() {
            session.entries()
        } else {
            self.rows_from_args()
        };

        let x = overlay(session.x_bounds(), &self.x_min, &self.x_max);
        let y = overlay(session.y_bounds(), &self.y_min, &self.y_max);

        Ok(PlotInput {
            rows,
            x,
            y,
            session,
        })
    }

    fn load_session(&self, printer: &Printer) -> Result<Session> {
        let found = match &self.session {
            Some(path) => Some((path.clone(), Session::load(path)?)),
            None => Session::find(Path::new("."))?,
        };

        Ok(match found {
            Some((path, session)) => {
                let rows = plural(session.rows.len(), "row", "rows");
                printer.info("Session", &format!("{} ({})", display_path(&path), rows));
                session
            }
            None => Session::default(),
        })
    }

    fn rows_from_args(&self) -> Vec<RawEntry> {
        self.formulas
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let color = self
                    .colors
                    .get(i)
                    .map(|c| Colour::new(c.as_str()))
                    .unwrap_or_else(|| Colour::for_row(i));
                RawEntry::new(text.as_str(), color)
            })
            .collect()
    }
}

fn overlay(base: AxisBounds, min: &Option<String>, max: &Option<String>) -> AxisBounds {
    AxisBounds {
        min: min.clone().unwrap_or(base.min),
        max: max.clone().unwrap_or(base.max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SESSION_FILENAME;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn session_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSION_FILENAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_formulas_get_colours() {
        let (_dir, path) = session_file("");
        let args = InputArgs {
            formulas: vec!["sinx".to_string(), "cosx".to_string()],
            colors: vec!["#123456".to_string()],
            session: Some(path),
            ..Default::default()
        };
        let input = args.resolve(&Printer::plain()).unwrap();

        assert_eq!(input.rows[0], RawEntry::new("sinx", "#123456"));
        assert_eq!(input.rows[1].color, Colour::for_row(1));
    }

    #[test]
    fn test_session_rows_used_without_formulas() {
        let (_dir, path) = session_file("rows:\n  - text: tanx\n");
        let args = InputArgs {
            session: Some(path),
            ..Default::default()
        };
        let input = args.resolve(&Printer::plain()).unwrap();

        assert_eq!(input.rows.len(), 1);
        assert_eq!(input.rows[0].text, "tanx");
    }

    #[test]
    fn test_formulas_replace_session_rows() {
        let (_dir, path) = session_file("rows:\n  - text: tanx\n");
        let args = InputArgs {
            formulas: vec!["x".to_string()],
            session: Some(path),
            ..Default::default()
        };
        let input = args.resolve(&Printer::plain()).unwrap();

        assert_eq!(input.rows.len(), 1);
        assert_eq!(input.rows[0].text, "x");
    }

    #[test]
    fn test_bounds_overlay_session() {
        let (_dir, path) = session_file("x: { min: -1, max: 1 }\ny: { min: -2, max: 2 }\n");
        let args = InputArgs {
            x_max: Some("5".to_string()),
            y_min: Some("-7".to_string()),
            session: Some(path),
            ..Default::default()
        };
        let input = args.resolve(&Printer::plain()).unwrap();

        assert_eq!(input.x, AxisBounds::new("-1", "5"));
        assert_eq!(input.y, AxisBounds::new("-7", "2"));
    }

    #[test]
    fn test_missing_session_file_is_error() {
        let dir = tempdir().unwrap();
        let args = InputArgs {
            session: Some(dir.path().join("missing.yaml")),
            ..Default::default()
        };
        assert!(args.resolve(&Printer::plain()).is_err());
    }
}
