//! Plotting engine boundary.
//!
//! The engine owns formula parsing, sampling and pixels. fplot hands it one
//! [`PlotBatch`] per draw through [`PlotEngine::render`] and translates a
//! rejection into something the user can act on.

mod json;

pub use json::{check_parentheses, Canvas, JsonEngine, PlotDocument};

use thiserror::Error;

use crate::error::{FplotError, Result};
use crate::formula::BatchOutcome;
use crate::types::PlotBatch;

/// Decimal places for each axis in the cursor readout.
pub const CURSOR_DECIMALS: usize = 3;

/// The engine refused a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Something that can draw a plot batch.
pub trait PlotEngine {
    fn render(&mut self, batch: &PlotBatch) -> std::result::Result<(), EngineError>;
}

/// Render a built batch with a single engine call.
///
/// If the engine fails and rows already failed in this draw, the input is the
/// likely cause and the error says so. Otherwise the engine's own message is
/// passed through unchanged.
pub fn draw<E: PlotEngine + ?Sized>(engine: &mut E, outcome: &BatchOutcome) -> Result<()> {
    engine.render(&outcome.batch).map_err(|err| {
        if outcome.has_failures() {
            FplotError::Formula {
                message: "some formulas failed to parse".to_string(),
                help: Some("Check the input formulas".to_string()),
            }
        } else {
            FplotError::Render {
                message: err.message,
                help: None,
            }
        }
    })
}

/// Cursor readout in data coordinates: `(1.000, -0.500)`.
pub fn format_cursor(x: f64, y: f64) -> String {
    format!("({:.*}, {:.*})", CURSOR_DECIMALS, x, CURSOR_DECIMALS, y)
}
