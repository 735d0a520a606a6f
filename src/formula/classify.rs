//! Explicit/implicit classification and zero-form rewriting.

use thiserror::Error;

use crate::types::PlotKind;

/// Why a single row could not be turned into a plot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected exactly one '=' in an equation, found {count}")]
    Equation { count: usize },

    #[error("'{operator}' is a comparison, not an equation")]
    Comparison { operator: String },
}

impl RowError {
    /// Machine-readable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            RowError::Equation { .. } => "fplot::row::equation",
            RowError::Comparison { .. } => "fplot::row::comparison",
        }
    }

    /// Suggestion for fixing the row.
    pub fn help(&self) -> &'static str {
        match self {
            RowError::Equation { .. } => {
                "Write implicit curves as a single equation, e.g. x^2 + y^2 = 9"
            }
            RowError::Comparison { .. } => {
                "Inequalities can't be plotted; use '=' for an implicit curve"
            }
        }
    }
}

/// A normalized formula sorted into its plot kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: PlotKind,
    /// The formula to hand to the engine. Zero-form for implicit plots.
    pub formula: String,
}

/// Classify a normalized formula.
///
/// Anything without `=` is explicit and passes through verbatim. A single
/// `=` makes it implicit and rewrites `lhs = rhs` to `lhs - (rhs)`.
pub fn classify(normalized: &str) -> Result<Classified, RowError> {
    let Some((left, right)) = normalized.split_once('=') else {
        return Ok(Classified {
            kind: PlotKind::Explicit,
            formula: normalized.to_string(),
        });
    };

    let count = normalized.matches('=').count();
    if count != 1 {
        return Err(RowError::Equation { count });
    }

    let trailing = left.trim_end().chars().next_back();
    if let Some(op) = trailing.filter(|&c| matches!(c, '<' | '>' | '!')) {
        return Err(RowError::Comparison {
            operator: format!("{}=", op),
        });
    }

    Ok(Classified {
        kind: PlotKind::Implicit,
        formula: zero_form(left, right),
    })
}

/// `lhs = rhs` -> `lhs - (rhs)`. The right side keeps its whitespace.
pub fn zero_form(left: &str, right: &str) -> String {
    format!("{} - ({})", left.trim_end(), right)
}
