//! Batch building: rows in, plot batch plus per-row failures out.

use std::fmt;

use log::{debug, warn};

use crate::error::Result;
use crate::types::{Axis, AxisBounds, AxisRange, PlotBatch, PlotKind, PlotSpec, RawEntry};

use super::classify::{classify, RowError};
use super::normalize::normalize;

/// A row that was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// Position of the row in the input, starting at 0.
    pub row: usize,
    /// The trimmed text the user typed.
    pub text: String,
    pub error: RowError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{} `{}`: {}", self.row + 1, self.text, self.error)
    }
}

/// The result of building a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub batch: PlotBatch,
    pub failures: Vec<RowFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Nothing to plot and nothing went wrong: every row was blank.
    pub fn is_blank(&self) -> bool {
        self.batch.is_empty() && self.failures.is_empty()
    }

    /// Nothing to plot because every non-blank row failed.
    pub fn all_failed(&self) -> bool {
        self.batch.is_empty() && !self.failures.is_empty()
    }
}

/// Validate the axis bounds, then turn each row into a plot spec.
///
/// Bad bounds fail the whole call before any row is looked at. Bad rows are
/// recorded in the outcome and never affect their siblings.
pub fn build_batch(rows: &[RawEntry], x: &AxisBounds, y: &AxisBounds) -> Result<BatchOutcome> {
    let x_range = x.validate(Axis::X)?;
    let y_range = y.validate(Axis::Y)?;
    Ok(build_batch_in(rows, x_range, y_range))
}

/// Build a batch against ranges that are already validated.
pub fn build_batch_in(
    rows: &[RawEntry],
    x_range: AxisRange,
    y_range: AxisRange,
) -> BatchOutcome {
    let mut batch = PlotBatch::new(x_range, y_range);
    let mut failures = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match build_spec(row) {
            Ok(Some(spec)) => {
                debug!("row {}: {} `{}`", index, spec.kind, spec.formula);
                batch.push(spec);
            }
            Ok(None) => {}
            Err(error) => {
                let failure = RowFailure {
                    row: index,
                    text: row.text.trim().to_string(),
                    error,
                };
                warn!("skipping {}", failure);
                failures.push(failure);
            }
        }
    }

    BatchOutcome { batch, failures }
}

/// Build the spec for one row. Blank rows yield `None`.
pub fn build_spec(row: &RawEntry) -> std::result::Result<Option<PlotSpec>, RowError> {
    let text = row.text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let classified = classify(&normalize(text))?;
    let spec = match classified.kind {
        PlotKind::Explicit => PlotSpec::explicit(classified.formula, row.color.clone()),
        PlotKind::Implicit => PlotSpec::implicit(classified.formula, row.color.clone()),
    };
    Ok(Some(spec))
}
