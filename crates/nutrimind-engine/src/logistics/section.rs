use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("Invalid numbered prefix regex"));

/// Leading glyphs that mark a subheading inside the section.
pub const SUBHEADING_GLYPHS: [&str; 7] = ["🛒", "📅", "💡", "🎯", "📦", "🍽️", "✅"];

/// Leading markers of an indented item, besides a numbered prefix.
pub const ITEM_PREFIXES: [char; 2] = ['•', '-'];

/// The rule separator character; lines made only of it are dropped.
pub const RULE: char = '=';

/// The three-way (plus skip) scheme used inside an extracted section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLine<'a> {
    /// The line carrying the marker, with rule characters removed.
    Title(String),
    /// A line starting with one of [`SUBHEADING_GLYPHS`].
    Subheading(&'a str),
    /// A bullet, hyphen or numbered line.
    Item(&'a str),
    /// Any other non-blank line.
    Text(&'a str),
    /// A blank or rule-only line.
    Skip,
}

impl<'a> SectionLine<'a> {
    /// Classifies one raw line of the section against the matched marker.
    pub fn classify(line: &'a str, marker: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.contains(marker) {
            return Self::Title(trimmed.replace(RULE, ""));
        }
        if SUBHEADING_GLYPHS.iter().any(|g| trimmed.starts_with(g)) {
            return Self::Subheading(trimmed);
        }
        if trimmed.starts_with(ITEM_PREFIXES) || NUMBERED_PREFIX.is_match(trimmed) {
            return Self::Item(trimmed);
        }
        if trimmed.is_empty() || trimmed.chars().all(|c| c == RULE) {
            return Self::Skip;
        }
        Self::Text(trimmed)
    }

    /// Writes this line's markup onto `out`. Skipped lines write nothing.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Title(text) => {
                out.push_str("<h3 style=\"margin-top: 0;\">");
                out.push_str(text);
                out.push_str("</h3>");
            }
            Self::Subheading(text) => {
                out.push_str("<h4 style=\"margin-top: 1rem;\">");
                out.push_str(text);
                out.push_str("</h4>");
            }
            Self::Item(text) => {
                out.push_str("<p style=\"margin-left: 1rem;\">");
                out.push_str(text);
                out.push_str("</p>");
            }
            Self::Text(text) => {
                out.push_str("<p>");
                out.push_str(text);
                out.push_str("</p>");
            }
            Self::Skip => {}
        }
    }
}
