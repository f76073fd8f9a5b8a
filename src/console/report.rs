//! The text block produced by one console action.

use std::fmt;

/// Ordered output lines of the last action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// A single `Error: <message>` line.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new(vec![format!("Error: {}", err)])
    }

    /// Render an action result, turning failures into an error report.
    pub fn from_result<E: std::error::Error>(result: Result<Report, E>) -> Self {
        match result {
            Ok(report) => report,
            Err(e) => Self::error(&e),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First line, which names the action.
    pub fn title(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::ChainError;

    #[test]
    fn test_display_joins_lines() {
        let report = Report::new(vec!["Ready".into(), "Active network: Base Sepolia".into()]);
        assert_eq!(report.to_string(), "Ready\nActive network: Base Sepolia");
        assert_eq!(report.title(), Some("Ready"));
    }

    #[test]
    fn test_error_is_single_line() {
        let report = Report::from_result::<ChainError>(Err(ChainError::InvalidAddress));
        assert_eq!(report.lines(), ["Error: Invalid address"]);
    }
}
