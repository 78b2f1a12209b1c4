use std::fmt;

use super::ast::Pos;

/// Resolves byte offsets of a parsed file into lines and columns.
#[derive(Debug, Default, Clone)]
pub struct SourceMap {
    filename: String,
    /// Offset of the first byte of every line
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(filename: impl Into<String>, src: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(src.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            filename: filename.into(),
            line_starts,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn position(&self, pos: Pos) -> Position<'_> {
        let Some(offset) = pos.offset() else {
            return Position::default();
        };

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();

        Position {
            filename: &self.filename,
            line: line + 1,
            column: offset - line_start + 1,
        }
    }
}

/// A resolved source location. Lines and columns start at 1, columns count bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    pub filename: &'a str,
    /// 0 when the position is unknown
    pub line: usize,
    pub column: usize,
}

impl Position<'_> {
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("-");
        }
        if !self.filename.is_empty() {
            write!(f, "{}:", self.filename)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
