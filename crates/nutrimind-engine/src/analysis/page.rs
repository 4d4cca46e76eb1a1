use super::RenderedResults;

const PAGE_TITLE: &str = "NutriMind Analysis";

/// Wraps the three fragments into a standalone HTML document.
///
/// Each fragment is placed in a container whose id matches the display
/// surface it was produced for.
pub fn render_page(results: &RenderedResults) -> String {
    let sections = [
        ("triggersContent", "Detected Triggers", &results.triggers),
        (
            "recommendationContent",
            "Your Recommendation",
            &results.recommendation,
        ),
        ("logisticsContent", "Logistics", &results.logistics),
    ];

    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    out.push_str("</head>\n<body>\n<main id=\"resultsSection\">\n");
    for (id, title, body) in sections {
        out.push_str(&format!(
            "<section class=\"result-card\">\n<h2>{title}</h2>\n<div id=\"{id}\">{body}</div>\n</section>\n"
        ));
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}
