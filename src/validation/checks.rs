//! Individual checks over a built batch.

use crate::engine::check_parentheses;
use crate::formula::BatchOutcome;
use crate::types::PlotKind;

use super::warning::Diagnostic;

/// One error per row the pipeline had to drop.
pub fn check_row_failures(outcome: &BatchOutcome) -> Vec<Diagnostic> {
    outcome
        .failures
        .iter()
        .map(|failure| {
            Diagnostic::error(
                failure.error.code(),
                format!("`{}`: {}", failure.text, failure.error),
            )
            .at_row(failure.row)
            .with_help(failure.error.help())
        })
        .collect()
}

/// Warn when every row was blank.
pub fn check_nothing_to_plot(outcome: &BatchOutcome) -> Vec<Diagnostic> {
    if !outcome.is_blank() {
        return vec![];
    }
    vec![Diagnostic::warning("fplot::batch::empty", "no formulas to plot")
        .with_help("Add a formula such as sin(x)")]
}

/// One error per formula the engine would reject at draw time.
pub fn check_engine_accepts(outcome: &BatchOutcome) -> Vec<Diagnostic> {
    outcome
        .batch
        .iter()
        .filter_map(|spec| check_parentheses(&spec.formula).err())
        .map(|err| {
            Diagnostic::error("fplot::formula::structure", err.message)
                .with_help("Balance the parentheses in the formula")
        })
        .collect()
}

/// Warn about explicit formulas that use `y`, which the engine can't evaluate
/// as `y = f(x)`. Usually a missing `=`.
pub fn check_explicit_uses_y(outcome: &BatchOutcome) -> Vec<Diagnostic> {
    outcome
        .batch
        .iter()
        .filter(|spec| spec.kind == PlotKind::Explicit && mentions_variable(&spec.formula, 'y'))
        .map(|spec| {
            Diagnostic::warning(
                "fplot::formula::explicit-y",
                format!("`{}` uses y but is not an equation", spec.formula),
            )
            .with_help("Write it as an equation, e.g. x^2 + y^2 = 9")
        })
        .collect()
}

/// Whether `var` appears as a standalone identifier.
fn mentions_variable(formula: &str, var: char) -> bool {
    let chars: Vec<char> = formula.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        let before = i.checked_sub(1).map(|j| chars[j]);
        let after = chars.get(i + 1).copied();
        c == var && !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
