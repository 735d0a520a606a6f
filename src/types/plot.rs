//! Rows, plot specs and batches.

use std::fmt;

use crate::types::{AxisRange, Colour};

/// One user-authored row: formula text plus display colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub text: String,
    pub color: Colour,
}

impl RawEntry {
    pub fn new(text: impl Into<String>, color: impl Into<Colour>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }

    /// Build rows from formula texts, colouring them from the default cycle.
    pub fn with_default_colours<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self::new(text, Colour::for_row(i)))
            .collect()
    }
}

/// How a formula is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// `y = f(x)`
    Explicit,
    /// The locus where the zero-form expression is 0.
    Implicit,
}

impl PlotKind {
    pub fn name(self) -> &'static str {
        match self {
            PlotKind::Explicit => "explicit",
            PlotKind::Implicit => "implicit",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Preferred drawing style when it differs from the engine's default sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderHint {
    /// Connect samples into a polyline.
    Polyline,
}

/// A single plot request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    /// Normalized formula; for implicit plots always in zero-form.
    pub formula: String,
    pub kind: PlotKind,
    pub color: Colour,
    pub hint: Option<RenderHint>,
}

impl PlotSpec {
    pub fn explicit(formula: impl Into<String>, color: Colour) -> Self {
        Self {
            formula: formula.into(),
            kind: PlotKind::Explicit,
            color,
            hint: Some(RenderHint::Polyline),
        }
    }

    pub fn implicit(formula: impl Into<String>, color: Colour) -> Self {
        Self {
            formula: formula.into(),
            kind: PlotKind::Implicit,
            color,
            hint: None,
        }
    }
}

/// Everything the plotting engine needs for one draw, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBatch {
    pub specs: Vec<PlotSpec>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl PlotBatch {
    pub fn new(x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            specs: Vec::new(),
            x_range,
            y_range,
        }
    }

    pub fn push(&mut self, spec: PlotSpec) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlotSpec> {
        self.specs.iter()
    }
}
