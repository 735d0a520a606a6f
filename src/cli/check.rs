//! Check command implementation.

use clap::Args;

use crate::error::{FplotError, Result};
use crate::formula::build_batch;
use crate::output::{plural, Printer};
use crate::validation::{check_batch, print_diagnostics, summary};

use super::input::InputArgs;

/// Check formulas and bounds without drawing
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let input = args.input.resolve(printer)?;
    let outcome = build_batch(&input.rows, &input.x, &input.y)?;

    printer.status("Checked", &plural(input.rows.len(), "row", "rows"));

    let result = check_batch(&outcome);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        printer.error("Check", &summary(&result));
        return Err(FplotError::Formula {
            message: format!(
                "{} failed to parse",
                plural(result.error_count(), "formula", "formulas")
            ),
            help: None,
        });
    }

    printer.status("Check", &summary(&result));
    Ok(())
}
