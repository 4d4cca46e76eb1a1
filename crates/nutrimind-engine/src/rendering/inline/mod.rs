//! # Inline Formatting
//!
//! Textual emphasis rewriting for the content of a single line.
//!
//! This is not an inline parser: each emphasis kind is one non-greedy regex
//! substitution, applied in a fixed order (strong, then emphasis). Unmatched
//! or malformed markers are left verbatim.
//!
//! ## Styles
//!
//! Which substitutions run depends on the block the text came from:
//! - paragraphs get strong and emphasis
//! - list items and headings get strong only, so `*word*` inside an item
//!   stays literal

pub mod kinds;

use kinds::{Emphasis, Strong};

/// The set of inline substitutions applied to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// `**bold**` only.
    StrongOnly,
    /// `**bold**` followed by `*italic*`.
    StrongAndEmphasis,
}

/// Rewrites emphasis markup in `text` according to `style`.
pub fn format_inline(text: &str, style: InlineStyle) -> String {
    let strong = format!("<{tag}>${{1}}</{tag}>", tag = Strong::TAG);
    let out = Strong::pattern().replace_all(text, strong.as_str());

    match style {
        InlineStyle::StrongOnly => out.into_owned(),
        InlineStyle::StrongAndEmphasis => {
            let em = format!("<{tag}>${{1}}</{tag}>", tag = Emphasis::TAG);
            Emphasis::pattern()
                .replace_all(&out, em.as_str())
                .into_owned()
        }
    }
}
