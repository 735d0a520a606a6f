//! Normalize command implementation.
//!
//! Prints what the pipeline makes of each formula: the normalized text on
//! stdout, the classification (or why the row would be skipped) on stderr.

use clap::Args;

use crate::error::Result;
use crate::formula::{classify, normalize};
use crate::output::Printer;

/// Print the normalized form of each formula
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Formulas to normalize
    #[arg(required = true)]
    pub formulas: Vec<String>,
}

pub fn run(args: NormalizeArgs, printer: &Printer) -> Result<()> {
    for formula in &args.formulas {
        let normalized = normalize(formula.trim());
        println!("{}", normalized);

        match classify(&normalized) {
            Ok(classified) => printer.info(classified.kind.name(), &classified.formula),
            Err(err) => printer.warning("invalid", &err.to_string()),
        }
    }
    Ok(())
}
