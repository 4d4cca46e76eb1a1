//! # Inline Kinds
//!
//! Emphasis types that own their delimiters and output tags. Each pattern is
//! built from its kind's `DELIM`, and the formatter writes `TAG`.

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy `DELIM text DELIM` pattern capturing the enclosed text.
fn delimited(delim: &str) -> Regex {
    let delim = regex::escape(delim);
    Regex::new(&format!("{delim}(.+?){delim}")).expect("Invalid delimiter regex")
}

/// Strong emphasis: `**text**` becomes `<strong>text</strong>`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
    pub const TAG: &'static str = "strong";

    pub fn pattern() -> &'static Regex {
        static RE: LazyLock<Regex> =
            LazyLock::new(|| delimited(Strong::DELIM));
        &RE
    }
}

/// Emphasis: `*text*` becomes `<em>text</em>`.
///
/// Applied after [`Strong`], so any `**` pairs are already consumed.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
    pub const TAG: &'static str = "em";

    pub fn pattern() -> &'static Regex {
        static RE: LazyLock<Regex> =
            LazyLock::new(|| delimited(Emphasis::DELIM));
        &RE
    }
}
