pub mod blocks;
pub(crate) mod html;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{MarkdownLineClassifier, RenderState};

/// Shown in place of an empty recommendation.
pub const NO_RECOMMENDATION: &str = "<p>No recommendation available.</p>";

/// Renders recommendation text into markup, or the empty-state paragraph.
pub fn render_recommendation(text: &str) -> String {
    if text.is_empty() {
        return NO_RECOMMENDATION.to_string();
    }
    render_blocks(text)
}

/// Renders every line of `text` through the classifier and block accumulator.
///
/// Unlike [`render_recommendation`], empty input yields an empty string.
pub fn render_blocks(text: &str) -> String {
    let classifier = MarkdownLineClassifier;

    text.split('\n')
        .map(|line| classifier.classify(line))
        .fold(RenderState::new(), RenderState::push)
        .finish()
}
