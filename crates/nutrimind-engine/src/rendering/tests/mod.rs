//! Integration tests for the rendering module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::rendering::{
    NO_RECOMMENDATION,
    blocks::{LineKind, classify},
    render_blocks, render_recommendation,
};

// Fixture-based snapshot tests

#[test]
fn fixture_meal_plan() {
    assert_fixture("meal_plan");
}

#[test]
fn fixture_unbroken_blocks() {
    assert_fixture("unbroken_blocks");
}

#[test]
fn fixture_heading_levels() {
    assert_fixture("heading_levels");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/rendering/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let html = render_recommendation(&md);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Property tests

/// Plain lines without markdown characters map one-to-one onto paragraphs.
#[test]
fn plain_lines_become_one_paragraph_each() {
    let text = "first line\n\n  second line  \nthird line\n";
    assert_eq!(
        render_recommendation(text),
        "<p>first line</p><p>second line</p><p>third line</p>"
    );
}

#[test]
fn well_formed_table() {
    assert_eq!(
        render_recommendation("| A | B |\n|---|---|\n| 1 | 2 |"),
        "<table class=\"meal-plan-table\">\
         <thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody>\
         </table>"
    );
}

#[test]
fn list_then_table_without_blank_line() {
    let html = render_recommendation("- Eggs\n- Oats\n| Day | Meal |\n| Mon | Oats |");
    assert_eq!(
        html,
        "<ul><li>Eggs</li><li>Oats</li></ul>\
         <table class=\"meal-plan-table\">\
         <thead><tr><th>Day</th><th>Meal</th></tr></thead>\
         <tbody><tr><td>Mon</td><td>Oats</td></tr></tbody>\
         </table>"
    );
}

#[test]
fn unterminated_list_is_closed() {
    let html = render_recommendation("- a\n- b");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn unterminated_table_is_flushed() {
    let html = render_recommendation("Intro\n| H1 | H2 |\n|--|--|\n| x | y |");
    assert!(html.starts_with("<p>Intro</p><table"));
    assert!(html.ends_with("<tr><td>x</td><td>y</td></tr></tbody></table>"));
}

#[test]
fn rendering_is_idempotent() {
    let md = "# Plan\n- **a**\n| x | y |\n*b*";
    assert_eq!(render_recommendation(md), render_recommendation(md));
}

#[test]
fn italic_in_paragraph_but_not_in_list_item() {
    assert_eq!(render_recommendation("*word*"), "<p><em>word</em></p>");
    assert_eq!(
        render_recommendation("- *word*"),
        "<ul><li>*word*</li></ul>"
    );
    assert_eq!(
        render_recommendation("1. *word*"),
        "<ul><li>*word*</li></ul>"
    );
}

#[test]
fn bold_in_paragraph_and_list_item() {
    assert_eq!(
        render_recommendation("**x**"),
        "<p><strong>x</strong></p>"
    );
    assert_eq!(
        render_recommendation("- **x**"),
        "<ul><li><strong>x</strong></li></ul>"
    );
}

#[test]
fn crlf_lines_are_trimmed() {
    assert_eq!(
        render_recommendation("# Title\r\n- a\r\n"),
        "<h2>Title</h2><ul><li>a</li></ul>"
    );
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    assert_eq!(render_recommendation("\u{FEFF}# Title"), "<h2>Title</h2>");
}

#[test]
fn non_ascii_digits_do_not_start_a_list() {
    assert_eq!(render_recommendation("\u{0663}. item"), "<p>\u{0663}. item</p>");
    assert_eq!(render_recommendation("\u{FF11}. item"), "<p>\u{FF11}. item</p>");
}

#[test]
fn empty_recommendation_shows_message() {
    assert_eq!(render_recommendation(""), NO_RECOMMENDATION);
}

#[test]
fn whitespace_only_renders_nothing() {
    assert_eq!(render_recommendation(" \n\t\n"), "");
    assert_eq!(render_blocks(""), "");
}

/// Every classified kind is handled by the accumulator.
#[test]
fn classification_is_total() {
    let lines = [
        "",
        "|---|",
        "| a |",
        "# h",
        "1. n",
        "- b",
        "text",
        "\u{1F4CB} emoji text",
    ];
    for line in lines {
        match classify(line) {
            LineKind::Blank
            | LineKind::TableSeparator
            | LineKind::TableRow { .. }
            | LineKind::Heading { .. }
            | LineKind::NumberedItem { .. }
            | LineKind::BulletItem { .. }
            | LineKind::Paragraph { .. } => {}
        }
    }
}
