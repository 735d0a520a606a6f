//! fplot - Formula normalization for function plotting
//!
//! A library for turning loosely typed math formulas (`sin2x`, `LN(x)`,
//! `x^2 + y^2 = 9`) into a batch of explicit and implicit plot requests for a
//! plotting engine, skipping bad rows without losing the good ones.

pub mod cli;
pub mod engine;
pub mod error;
pub mod formula;
pub mod output;
pub mod session;
pub mod types;
pub mod validation;

pub use engine::{draw, format_cursor, Canvas, EngineError, JsonEngine, PlotDocument, PlotEngine};
pub use error::{FplotError, Result};
pub use formula::{build_batch, classify, normalize, BatchOutcome, RowError, RowFailure};
pub use session::{Session, SESSION_FILENAME};
pub use types::{
    Axis, AxisBounds, AxisRange, Colour, PlotBatch, PlotKind, PlotSpec, RawEntry, RenderHint,
};
pub use validation::{check_batch, Diagnostic, Severity, ValidationResult};
