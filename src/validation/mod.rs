//! Diagnostics for built batches.
//!
//! Turns recorded row failures and a few lints into diagnostics. Used by
//! `fplot check` and to report skipped rows during `fplot draw`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::formula::BatchOutcome;
use crate::output::{plural, Printer};

/// Run all checks against a built batch.
pub fn check_batch(outcome: &BatchOutcome) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.extend(checks::check_row_failures(outcome));
    result.extend(checks::check_engine_accepts(outcome));
    result.extend(checks::check_explicit_uses_y(outcome));
    result.extend(checks::check_nothing_to_plot(outcome));

    result.sort();
    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        let row = d.row.map(|r| format!("f{}: ", r + 1)).unwrap_or_default();
        eprintln!("  {}[{}]: {}{}", label, d.code, row, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

/// One-line summary of a result.
pub fn summary(result: &ValidationResult) -> String {
    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");
    if result.has_errors() {
        format!("failed: {}, {}", errors, warnings)
    } else if result.warning_count() > 0 {
        format!("passed ({})", warnings)
    } else {
        "passed".to_string()
    }
}
