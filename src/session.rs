//! Session file (fplot.yaml) parsing.
//!
//! A session holds the formula rows, axis bounds and canvas settings for a
//! plot, so a set of curves can be redrawn without retyping them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::Canvas;
use crate::error::{FplotError, Result};
use crate::types::{AxisBounds, Colour, RawEntry};

/// The name of the session file.
pub const SESSION_FILENAME: &str = "fplot.yaml";

/// A bound as written in YAML: `-10` and `"-10"` are both accepted.
///
/// Kept as text until range validation so a typo is reported as a range
/// error rather than a YAML error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Number(f64),
    Text(String),
}

impl BoundValue {
    pub fn to_text(&self) -> String {
        match self {
            BoundValue::Number(n) => n.to_string(),
            BoundValue::Text(s) => s.clone(),
        }
    }
}

/// Bounds for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    #[serde(default = "default_min")]
    pub min: BoundValue,
    #[serde(default = "default_max")]
    pub max: BoundValue,
}

fn default_min() -> BoundValue {
    BoundValue::Number(-10.0)
}

fn default_max() -> BoundValue {
    BoundValue::Number(10.0)
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl BoundsConfig {
    pub fn to_bounds(&self) -> AxisBounds {
        AxisBounds::new(self.min.to_text(), self.max.to_text())
    }
}

/// One formula row. Rows without a colour get one from the default cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowConfig {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Colour>,
}

/// Session loaded from fplot.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub x: BoundsConfig,
    pub y: BoundsConfig,
    pub width: u32,
    pub height: u32,
    pub grid: bool,
    pub rows: Vec<RowConfig>,
}

impl Default for Session {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            x: BoundsConfig::default(),
            y: BoundsConfig::default(),
            width: canvas.width,
            height: canvas.height,
            grid: canvas.grid,
            rows: vec![],
        }
    }
}

impl Session {
    /// The session `fplot init` writes: a single `sin(x)` row.
    pub fn starter() -> Self {
        Self {
            rows: vec![RowConfig {
                text: "sin(x)".to_string(),
                color: Some(Colour::for_row(0)),
            }],
            ..Default::default()
        }
    }

    /// Load a session from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FplotError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read session: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a session from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| FplotError::Parse {
            message: format!("Invalid session: {}", e),
            help: Some(format!("Check {} syntax", SESSION_FILENAME)),
        })
    }

    /// Load `fplot.yaml` from a directory if there is one.
    pub fn find(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let path = dir.join(SESSION_FILENAME);
        if !path.is_file() {
            return Ok(None);
        }
        let session = Self::load(&path)?;
        Ok(Some((path, session)))
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FplotError::Parse {
            message: format!("Failed to serialize session: {}", e),
            help: None,
        })
    }

    /// Rows as pipeline input, filling in default colours by position.
    pub fn entries(&self) -> Vec<RawEntry> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let color = row.color.clone().unwrap_or_else(|| Colour::for_row(i));
                RawEntry::new(row.text.clone(), color)
            })
            .collect()
    }

    pub fn x_bounds(&self) -> AxisBounds {
        self.x.to_bounds()
    }

    pub fn y_bounds(&self) -> AxisBounds {
        self.y.to_bounds()
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
            grid: self.grid,
            ..Canvas::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_session() {
        let session = Session::parse("width: 640").unwrap();

        assert_eq!(session.width, 640);
        assert_eq!(session.height, 500);
        assert!(session.grid);
        assert!(session.rows.is_empty());
        assert_eq!(session.x_bounds(), AxisBounds::new("-10", "10"));
    }

    #[test]
    fn test_parse_full_session() {
        let yaml = r##"
x: { min: -3.5, max: 3.5 }
y:
  min: "-1"
  max: 1
width: 1024
height: 768
grid: false
rows:
  - text: sin(x)
    color: "#ff0000"
  - text: x^2 + y^2 = 9
"##;
        let session = Session::parse(yaml).unwrap();

        assert_eq!(session.x_bounds(), AxisBounds::new("-3.5", "3.5"));
        assert_eq!(session.y_bounds(), AxisBounds::new("-1", "1"));
        assert_eq!(session.width, 1024);
        assert!(!session.grid);

        let entries = session.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], RawEntry::new("sin(x)", "#ff0000"));
        assert_eq!(entries[1].color, Colour::for_row(1));
    }

    #[test]
    fn test_text_bounds_fail_at_validation() {
        let session = Session::parse("x: { min: left, max: 10 }").unwrap();
        let err = session.x_bounds().validate(Axis::X).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_parse_empty_session() {
        let session = Session::parse("").unwrap();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Session::parse("rows: [").unwrap_err();
        assert!(matches!(err, FplotError::Parse { .. }));
    }

    #[test]
    fn test_canvas_from_session() {
        let session = Session::parse("width: 300\nheight: 200\ngrid: false").unwrap();
        let canvas = session.canvas();
        assert_eq!(canvas.width, 300);
        assert_eq!(canvas.height, 200);
        assert!(!canvas.grid);
        assert_eq!(canvas.target, Canvas::default().target);
    }

    #[test]
    fn test_starter_round_trips_through_yaml() {
        let yaml = Session::starter().to_yaml().unwrap();
        let session = Session::parse(&yaml).unwrap();
        assert_eq!(session.rows.len(), 1);
        assert_eq!(session.rows[0].text, "sin(x)");
        assert_eq!(session.entries()[0].color, Colour::for_row(0));
    }

    #[test]
    fn test_find_in_directory() {
        let dir = tempdir().unwrap();
        assert!(Session::find(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(SESSION_FILENAME), "rows:\n  - text: cosx\n").unwrap();
        let (path, session) = Session::find(dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join(SESSION_FILENAME));
        assert_eq!(session.rows[0].text, "cosx");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Session::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, FplotError::Io { .. }));
    }
}
