use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid numbered list regex"));

/// List item block type with owned marker knowledge.
///
/// Bullet and numbered items both render inside the same unordered list
/// wrapper; only the prefix that is stripped differs.
pub struct ListItem;

impl ListItem {
    /// Two-character bullet prefixes (marker plus one space).
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Strips a numbered prefix such as `12. `, returning the remainder.
    ///
    /// Only the single whitespace character after the dot is consumed.
    pub fn strip_numbered(s: &str) -> Option<&str> {
        NUMBERED_PREFIX.find(s).map(|m| &s[m.end()..])
    }

    /// Strips a bullet prefix, returning the remainder.
    pub fn strip_bullet(s: &str) -> Option<&str> {
        Self::BULLETS.iter().find_map(|prefix| s.strip_prefix(prefix))
    }
}
