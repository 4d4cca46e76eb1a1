//! Trigger label rendering.
//!
//! Labels are inserted as text, so they are escaped and never formatted.

/// Shown when no triggers were detected.
pub const NO_TRIGGERS: &str = "<p>No specific triggers detected in your journal entry.</p>";

/// Sentence placed before the tag list.
pub const TRIGGERS_INTRO: &str =
    "<p>We detected the following triggers that may influence your eating patterns:</p>";

/// Renders one tag per label, in input order, or the empty-state message.
pub fn render_triggers<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return NO_TRIGGERS.to_string();
    }

    let mut out = String::from(TRIGGERS_INTRO);
    out.push_str("<div class=\"trigger-list\">");
    for label in labels {
        out.push_str("<span class=\"trigger-tag\">");
        out.push_str(&html_escape::encode_text(label.as_ref()));
        out.push_str("</span>");
    }
    out.push_str("</div>");
    out
}
