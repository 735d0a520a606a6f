use miette::Diagnostic;
use thiserror::Error;

use crate::types::Axis;

/// Main error type for fplot operations
#[derive(Error, Diagnostic, Debug)]
pub enum FplotError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fplot::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(fplot::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid {axis} axis range: {message}")]
    #[diagnostic(code(fplot::range))]
    Range {
        axis: Axis,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Formula error: {message}")]
    #[diagnostic(code(fplot::formula))]
    Formula {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(fplot::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl FplotError {
    /// Whether this error came from axis bound validation.
    pub fn is_range(&self) -> bool {
        matches!(self, FplotError::Range { .. })
    }
}

pub type Result<T> = std::result::Result<T, FplotError>;
