//! Source map for rendering a `Span` back to a line of source with a caret.

use super::Span;

/// Holds the single source file a JaoLang run is interpreting, along with
/// precomputed line start offsets so a `Span` can be turned into a
/// `rustc`-style one-line-plus-caret diagnostic.
pub struct SourceMap {
    name: String,
    content: String,
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source line a 1-based line number refers to, newline stripped.
    pub fn line_at(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Render `name:line:column` followed by the offending line and a caret.
    pub fn format_span(&self, span: Span) -> String {
        let line_text = self.line_at(span.line).unwrap_or("");
        format!(
            "--> {}:{}:{}\n{}\n{}^",
            self.name,
            span.line,
            span.column,
            line_text,
            " ".repeat(span.column.saturating_sub(1) as usize),
        )
    }
}
