use super::kinds::{Heading, ListItem, TableRow};

/// Byte order mark, stripped along with surrounding whitespace.
const BOM: char = '\u{FEFF}';

/// Classification of a single line, borrowing from the input text.
///
/// This is phase 1 of block rendering: each line is classified on its own,
/// with no knowledge of the lines around it. Every line maps to exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only.
    Blank,
    /// A table separator row such as `|---|:---:|`. Never rendered.
    TableSeparator,
    /// A pipe-delimited row with its trimmed, non-empty cells.
    TableRow { cells: Vec<&'a str> },
    /// A heading with its output level (2..=4) and text after the prefix.
    Heading { level: u8, text: &'a str },
    /// A `1. ` style item with the numeric prefix stripped.
    NumberedItem { text: &'a str },
    /// A `- ` or `* ` item with the bullet stripped.
    BulletItem { text: &'a str },
    /// Anything else, trimmed.
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block rendering phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a raw line into a [`LineKind`].
    ///
    /// The line is trimmed first, including any byte order mark. Precedence, first match wins:
    /// blank, table path (pipe present and no leading `#`), heading,
    /// numbered item, bullet item, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if TableRow::is_candidate(trimmed) {
            if TableRow::is_separator(trimmed) {
                return LineKind::TableSeparator;
            }
            return LineKind::TableRow {
                cells: TableRow::cells(trimmed),
            };
        }

        if let Some((level, text)) = Heading::strip_prefix(trimmed) {
            return LineKind::Heading { level, text };
        }

        if let Some(text) = ListItem::strip_numbered(trimmed) {
            return LineKind::NumberedItem { text };
        }

        if let Some(text) = ListItem::strip_bullet(trimmed) {
            return LineKind::BulletItem { text };
        }

        LineKind::Paragraph { text: trimmed }
    }
}

/// Classifies a single line with the default classifier.
pub fn classify(line: &str) -> LineKind<'_> {
    MarkdownLineClassifier.classify(line)
}
