//! Diagnostic types for checked batches.

use std::fmt;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding about a row, or about the batch as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, e.g. "fplot::row::equation".
    pub code: &'static str,
    pub message: String,
    /// Row the finding is about, starting at 0. `None` for batch-wide findings.
    pub row: Option<usize>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    fn with_severity(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            row: None,
            help: None,
        }
    }

    /// Attach the row this finding is about.
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: ", self.severity, self.code)?;
        if let Some(row) = self.row {
            write!(f, "f{}: ", row + 1)?;
        }
        f.write_str(&self.message)
    }
}

/// Diagnostics collected for one batch, in row order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// No diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort by row, batch-wide findings last. Stable within a row.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|d| (d.row.is_none(), d.row.unwrap_or(0)));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl Extend<Diagnostic> for ValidationResult {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_clean());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error("fplot::test", "broken"));
        result.push(Diagnostic::warning("fplot::test", "odd"));
        result.push(Diagnostic::warning("fplot::test", "odder"));

        assert!(result.has_errors());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_display_with_row() {
        let d = Diagnostic::error("fplot::row::equation", "two '=' signs").at_row(2);
        assert_eq!(d.to_string(), "error[fplot::row::equation]: f3: two '=' signs");

        let d = Diagnostic::warning("fplot::batch::empty", "nothing to plot");
        assert_eq!(d.to_string(), "warning[fplot::batch::empty]: nothing to plot");
    }

    #[test]
    fn test_sort_puts_batch_findings_last() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("b", "batch"));
        result.push(Diagnostic::error("r", "row 3").at_row(3));
        result.push(Diagnostic::error("r", "row 0").at_row(0));
        result.sort();

        let rows: Vec<Option<usize>> = result.iter().map(|d| d.row).collect();
        assert_eq!(rows, vec![Some(0), Some(3), None]);
    }

    #[test]
    fn test_help() {
        let d = Diagnostic::error("fplot::test", "bad").with_help("fix it");
        assert_eq!(d.help.as_deref(), Some("fix it"));
    }
}
