/// Pipe-delimited table row type with owned delimiter knowledge.
pub struct TableRow;

impl TableRow {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// Returns true if the line should take the table path at all.
    ///
    /// Lines starting with a heading marker never do, even when they contain a pipe.
    pub fn is_candidate(s: &str) -> bool {
        s.contains(Self::PIPE) && !s.starts_with(super::Heading::MARKER)
    }

    /// Returns true for a separator row: only pipes, dashes, colons and whitespace.
    pub fn is_separator(s: &str) -> bool {
        s.chars()
            .all(|c| c == Self::PIPE || c == '-' || c == ':' || c.is_whitespace())
    }

    /// Splits a row into trimmed, non-empty cells.
    pub fn cells(s: &str) -> Vec<&str> {
        s.split(Self::PIPE)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect()
    }
}
