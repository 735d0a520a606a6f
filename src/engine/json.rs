//! Plot option document output.
//!
//! Serializes a batch into the option object the browser plotting engine
//! takes (`target`, axis domains, `data` entries, tooltip settings) and
//! writes it as pretty JSON.

use std::io::Write;

use serde::Serialize;

use crate::types::{Colour, PlotBatch, PlotKind, PlotSpec, RenderHint};

use super::{EngineError, PlotEngine, CURSOR_DECIMALS};

/// Canvas settings that aren't part of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub target: String,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            target: "#functionChart".to_string(),
            width: 800,
            height: 500,
            grid: true,
        }
    }
}

/// The engine's option object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDocument {
    pub target: String,
    pub width: u32,
    pub height: u32,
    pub x_axis: AxisDoc,
    pub y_axis: AxisDoc,
    pub grid: bool,
    pub data: Vec<Datum>,
    pub tip: Tip,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisDoc {
    pub domain: [f64; 2],
}

/// One `data` entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    #[serde(rename = "fn")]
    pub formula: String,
    pub fn_type: &'static str,
    pub color: Colour,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub x_line: bool,
    pub y_line: bool,
    pub decimals: usize,
}

impl PlotDocument {
    pub fn new(batch: &PlotBatch, canvas: &Canvas) -> Self {
        Self {
            target: canvas.target.clone(),
            width: canvas.width,
            height: canvas.height,
            x_axis: AxisDoc {
                domain: batch.x_range.domain(),
            },
            y_axis: AxisDoc {
                domain: batch.y_range.domain(),
            },
            grid: canvas.grid,
            data: batch.iter().map(Datum::from).collect(),
            tip: Tip {
                x_line: true,
                y_line: true,
                decimals: CURSOR_DECIMALS,
            },
        }
    }
}

impl From<&PlotSpec> for Datum {
    fn from(spec: &PlotSpec) -> Self {
        // "linear" is the engine's name for y = f(x)
        let fn_type = match spec.kind {
            PlotKind::Explicit => "linear",
            PlotKind::Implicit => "implicit",
        };
        let graph_type = spec.hint.map(|hint| match hint {
            RenderHint::Polyline => "polyline",
        });

        Self {
            formula: spec.formula.clone(),
            fn_type,
            color: spec.color.clone(),
            graph_type,
        }
    }
}

/// Engine that writes the option document to a writer.
///
/// Rejects formulas with unbalanced parentheses the way the real parser
/// would, so a bad row surfaces at draw time instead of in the browser.
pub struct JsonEngine<W: Write> {
    canvas: Canvas,
    writer: W,
}

impl<W: Write> JsonEngine<W> {
    pub fn new(canvas: Canvas, writer: W) -> Self {
        Self { canvas, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlotEngine for JsonEngine<W> {
    fn render(&mut self, batch: &PlotBatch) -> Result<(), EngineError> {
        for spec in batch.iter() {
            check_parentheses(&spec.formula)?;
        }

        let document = PlotDocument::new(batch, &self.canvas);
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| EngineError::new(format!("Failed to serialize plot: {}", e)))?;

        writeln!(self.writer, "{}", json)
            .map_err(|e| EngineError::new(format!("Failed to write plot: {}", e)))
    }
}

/// Structural check the engine applies to every formula before rendering.
pub fn check_parentheses(formula: &str) -> Result<(), EngineError> {
    let mut depth = 0i32;
    for c in formula.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(EngineError::new(format!(
                        "unexpected ')' in `{}`",
                        formula
                    )));
                }
            }
            _ => {}
        }
    }
    if depth > 0 {
        return Err(EngineError::new(format!("unclosed '(' in `{}`", formula)));
    }
    Ok(())
}
