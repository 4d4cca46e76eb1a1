use crate::rendering::html::push_element;

/// CSS class carried by every rendered table.
pub const TABLE_CLASS: &str = "meal-plan-table";

/// An accumulated table: a header row and zero or more data rows.
///
/// Row widths are not checked against the header. Cells are emitted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table<'a> {
    pub headers: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> Table<'a> {
    /// Starts a table from its header row.
    pub fn with_headers(headers: Vec<&'a str>) -> Self {
        Self {
            headers,
            rows: vec![],
        }
    }

    /// Appends a data row.
    pub fn push_row(&mut self, cells: Vec<&'a str>) {
        self.rows.push(cells);
    }

    /// Returns true when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Renders the table fragment, or an empty string for an empty table.
    pub fn render(&self) -> String {
        build_table(&self.headers, &self.rows)
    }
}

/// Builds a complete table fragment from header cells and data rows.
///
/// Returns an empty string when both are empty. The `<thead>` section is
/// present only with headers, the `<tbody>` section only with rows.
pub fn build_table<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    if headers.is_empty() && rows.is_empty() {
        return String::new();
    }

    let mut out = format!("<table class=\"{TABLE_CLASS}\">");

    if !headers.is_empty() {
        out.push_str("<thead><tr>");
        for header in headers {
            push_element(&mut out, "th", header.as_ref());
        }
        out.push_str("</tr></thead>");
    }

    if !rows.is_empty() {
        out.push_str("<tbody>");
        for row in rows {
            out.push_str("<tr>");
            for cell in row {
                push_element(&mut out, "td", cell.as_ref());
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody>");
    }

    out.push_str("</table>");
    out
}
