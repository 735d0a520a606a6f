//! Axis bounds and validated axis ranges.

use std::fmt;

use serde::Serialize;

use crate::error::{FplotError, Result};

/// Which axis a range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Unvalidated axis bounds, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: String,
    pub max: String,
}

impl AxisBounds {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Bounds from numbers that still need the `min < max` check.
    pub fn numeric(min: f64, max: f64) -> Self {
        Self::new(min.to_string(), max.to_string())
    }

    /// Parse both bounds and check ordering.
    pub fn validate(&self, axis: Axis) -> Result<AxisRange> {
        let min = parse_bound(axis, "min", &self.min)?;
        let max = parse_bound(axis, "max", &self.max)?;
        AxisRange::new(axis, min, max)
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::numeric(-10.0, 10.0)
    }
}

/// A validated axis range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Create a range, rejecting non-finite or inverted bounds.
    pub fn new(axis: Axis, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FplotError::Range {
                axis,
                message: "bounds must be finite numbers".to_string(),
                help: None,
            });
        }
        if min >= max {
            return Err(FplotError::Range {
                axis,
                message: format!("min ({}) must be less than max ({})", min, max),
                help: Some(format!("Swap or widen the {} bounds", axis)),
            });
        }
        Ok(Self { min, max })
    }

    /// The range as a `[min, max]` domain pair.
    pub fn domain(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

fn parse_bound(axis: Axis, which: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| FplotError::Range {
        axis,
        message: format!("{} bound '{}' is not a number", which, trimmed),
        help: Some("Use numeric bounds like -10 and 10".to_string()),
    })
}
