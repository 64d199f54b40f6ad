//! Source line excerpt shown under a diagnostic.

use std::fmt;

/// One line of source with a caret under the offending column.
///
/// # Examples
///
/// ```
/// use calx_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("1.2.3", 1, 4);
/// assert_eq!(snippet.to_string(), "  1 | 1.2.3\n    |    ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column the caret points at (1-based)
    pub column: usize,
}

impl SourceSnippet {
    /// Create a snippet pointing at `column` of `line`.
    pub fn new(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
        }
    }
}

impl fmt::Display for SourceSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line_number.to_string().len().max(3);
        writeln!(f, "{:>gutter$} | {}", self.line_number, self.line)?;
        write!(
            f,
            "{:>gutter$} | {}^",
            "",
            " ".repeat(self.column.saturating_sub(1))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_column() {
        let text = SourceSnippet::new("'abc", 1, 4).to_string();
        assert_eq!(text.lines().nth(1), Some("    |    ^"));
    }

    #[test]
    fn test_wide_line_number_gutter() {
        let text = SourceSnippet::new("x", 1204, 1).to_string();
        assert_eq!(text, "1204 | x\n     | ^");
    }

    #[test]
    fn test_column_zero_points_at_start() {
        let text = SourceSnippet::new("", 1, 0).to_string();
        assert!(text.ends_with("| ^"));
    }
}
