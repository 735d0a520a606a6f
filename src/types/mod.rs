//! Core domain types for fplot.
//!
//! This module contains the values that flow through the pipeline:
//! - `Colour` - opaque per-row display colour
//! - `AxisBounds` / `AxisRange` - free-text and validated axis bounds
//! - `RawEntry`, `PlotSpec`, `PlotBatch` - rows in, plot requests out

mod colour;
mod plot;
mod range;

pub use colour::{Colour, DEFAULT_COLOURS};
pub use plot::{PlotBatch, PlotKind, PlotSpec, RawEntry, RenderHint};
pub use range::{Axis, AxisBounds, AxisRange};
