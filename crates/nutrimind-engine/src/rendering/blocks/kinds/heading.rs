/// Heading block type with owned prefix knowledge.
///
/// `##` and `###` both render at level 3. Upstream text uses them
/// interchangeably for section titles, so the collapse is kept as-is.
pub struct Heading;

impl Heading {
    /// The character that starts every heading prefix.
    pub const MARKER: char = '#';

    /// Prefixes in match order, paired with the output level.
    ///
    /// Longest prefix first so `#### ` is not mistaken for `# `.
    pub const PREFIXES: [(&'static str, u8); 4] =
        [("#### ", 4), ("### ", 3), ("## ", 3), ("# ", 2)];

    /// Strips a heading prefix, returning `(level, text)`.
    pub fn strip_prefix(s: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| s.strip_prefix(prefix).map(|text| (*level, text)))
    }
}
