//! # Logistics Section Extraction
//!
//! Locates a labeled sub-section inside a larger response blob and re-renders
//! it line by line, or synthesizes a fixed default plan when no marker matches.
//!
//! Marker lookup is priority-ordered: the first marker in the list that occurs
//! anywhere in the text wins, even if a later marker occurs earlier. The
//! section runs from that marker's first occurrence to the end of the text.

pub mod section;

pub use section::SectionLine;

/// Markers searched by [`render_logistics`], highest priority first.
pub const LOGISTICS_MARKERS: [&str; 2] = ["📋 LOGISTICS PLAN", "LOGISTICS PLAN"];

/// Shown in place of an empty response.
pub const NO_LOGISTICS: &str = "<p>No logistics information available.</p>";

/// Rendered when no marker is found. Never derived from the input.
pub const FALLBACK_PLAN: &str = concat!(
    "<div>",
    "<h4>📅 Meal Prep Plan</h4>",
    "<p>Plan to prep your meal this Sunday at 5:00 PM</p>",
    "<h4 style=\"margin-top: 1rem;\">🛒 Next Steps</h4>",
    "<p>1. Review the meal recommendation above for ingredients<br>",
    "2. Create your shopping list<br>",
    "3. Set a reminder for meal prep day</p>",
    "</div>",
);

const SECTION_OPEN: &str = "<div class=\"logistics-formatted\">";
const SECTION_CLOSE: &str = "</div>";

/// Renders the logistics section of a complete response using
/// [`LOGISTICS_MARKERS`].
pub fn render_logistics(full_text: &str) -> String {
    render_logistics_with_markers(full_text, &LOGISTICS_MARKERS)
}

/// Renders the logistics section, searching a caller-supplied marker list.
///
/// Empty input gets the empty-state paragraph; otherwise this is
/// [`extract_section`].
pub fn render_logistics_with_markers<S: AsRef<str>>(full_text: &str, markers: &[S]) -> String {
    if full_text.is_empty() {
        return NO_LOGISTICS.to_string();
    }
    extract_section(full_text, markers)
}

/// Extracts and renders the section starting at the first matching marker.
///
/// Empty markers are ignored. Falls back to [`FALLBACK_PLAN`] when none match.
pub fn extract_section<S: AsRef<str>>(full_text: &str, markers: &[S]) -> String {
    let Some((marker, start)) = find_marker(full_text, markers) else {
        log::debug!("no logistics marker found, using fallback plan");
        return FALLBACK_PLAN.to_string();
    };
    log::debug!("logistics marker {marker:?} found at byte {start}");

    let mut out = String::from(SECTION_OPEN);
    for line in full_text[start..].split('\n') {
        SectionLine::classify(line, marker).render_into(&mut out);
    }
    out.push_str(SECTION_CLOSE);
    out
}

/// Returns the first marker (in list order) that occurs in `text`, with its
/// earliest byte offset.
pub fn find_marker<'m, S: AsRef<str>>(text: &str, markers: &'m [S]) -> Option<(&'m str, usize)> {
    markers
        .iter()
        .map(|marker| marker.as_ref())
        .filter(|marker| !marker.is_empty())
        .find_map(|marker| text.find(marker).map(|start| (marker, start)))
}
