//! The formula pipeline.
//!
//! Each row goes through the same three stages:
//!
//! 1. [`normalize`] - fold case and full-width parentheses, alias `ln`,
//!    expand shorthand calls like `sin2x`
//! 2. [`classify`] - explicit `y = f(x)` or implicit equation, with implicit
//!    equations rewritten to zero-form
//! 3. [`build_batch`] - collect the specs in row order, recording rows that
//!    fail without dropping the rest
//!
//! # Usage
//!
//! ```
//! use fplot::formula::build_batch;
//! use fplot::types::{AxisBounds, RawEntry};
//!
//! let rows = RawEntry::with_default_colours(["sinx", "x^2 + y^2 = 9"]);
//! let outcome = build_batch(&rows, &AxisBounds::default(), &AxisBounds::default())?;
//!
//! assert_eq!(outcome.batch.specs[0].formula, "sin(x)");
//! assert_eq!(outcome.batch.specs[1].formula, "x^2 + y^2 - ( 9)");
//! # Ok::<(), fplot::FplotError>(())
//! ```

mod batch;
mod classify;
mod normalize;

pub use batch::{build_batch, build_batch_in, build_spec, BatchOutcome, RowFailure};
pub use classify::{classify, zero_form, Classified, RowError};
pub use normalize::{normalize, FUNCTION_NAMES};
