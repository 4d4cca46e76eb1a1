/// Writes `<tag>content</tag>` onto `out`.
pub(crate) fn push_element(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Returns `<tag>content</tag>`.
pub(crate) fn element(tag: &str, content: &str) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + content.len() + 5);
    push_element(&mut out, tag, content);
    out
}

/// Returns `<hN>content</hN>`.
pub(crate) fn heading(level: u8, content: &str) -> String {
    element(&format!("h{level}"), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_content() {
        assert_eq!(element("p", "hi"), "<p>hi</p>");
        assert_eq!(element("td", ""), "<td></td>");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(heading(2, "A"), "<h2>A</h2>");
        assert_eq!(heading(4, "B"), "<h4>B</h4>");
    }
}
