//! Colour token and the default row palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colours handed out to rows that don't pick one, cycled by row position.
pub const DEFAULT_COLOURS: [&str; 6] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f1c40f", "#9b59b6", "#34495e",
];

/// An opaque display colour attached to a row.
///
/// The pipeline never interprets the value; it is passed through to the
/// plotting engine as written (usually a `#RRGGBB` string from a colour picker).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(String);

impl Colour {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The default colour for the row at `index`.
    pub fn for_row(index: usize) -> Self {
        Self::new(DEFAULT_COLOURS[index % DEFAULT_COLOURS.len()])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::for_row(0)
    }
}

impl From<&str> for Colour {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Colour {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
