use crate::rendering::{
    html,
    inline::{InlineStyle, format_inline},
};

use super::{classify::LineKind, table::Table};

const LIST_OPEN: &str = "<ul>";
const LIST_CLOSE: &str = "</ul>";

/// The multi-line block currently accepting lines.
///
/// Only one block can be open at a time, so a list and a table never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpenBlock<'a> {
    #[default]
    None,
    List,
    Table(Table<'a>),
}

/// Accumulator threaded through the fold over classified lines.
///
/// Created per render call and consumed by [`RenderState::finish`].
#[derive(Debug, Clone, Default)]
pub struct RenderState<'a> {
    open: OpenBlock<'a>,
    out: Vec<String>,
}

impl<'a> RenderState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold step: applies one classified line and returns the next state.
    pub fn push(mut self, line: LineKind<'a>) -> Self {
        self.apply(line);
        self
    }

    /// Flushes any open block and joins the emitted fragments.
    pub fn finish(mut self) -> String {
        // EOF flush
        self.close_list();
        self.flush_table();
        self.out.concat()
    }

    pub fn open_block(&self) -> &OpenBlock<'a> {
        &self.open
    }

    /// Fragments emitted so far, in order.
    pub fn fragments(&self) -> &[String] {
        &self.out
    }

    fn apply(&mut self, line: LineKind<'a>) {
        log::trace!("apply {line:?} with {:?} open", self.open);

        match line {
            LineKind::Blank => {
                self.close_list();
                self.flush_table();
            }
            LineKind::TableSeparator => {}
            LineKind::TableRow { cells } => {
                self.close_list();
                if let OpenBlock::Table(table) = &mut self.open {
                    table.push_row(cells);
                } else {
                    self.open = OpenBlock::Table(Table::with_headers(cells));
                }
            }
            LineKind::Heading { level, text } => {
                self.flush_table();
                self.close_list();
                let content = format_inline(text, InlineStyle::StrongOnly);
                self.out.push(html::heading(level, &content));
            }
            LineKind::NumberedItem { text } | LineKind::BulletItem { text } => {
                self.flush_table();
                self.open_list();
                let content = format_inline(text, InlineStyle::StrongOnly);
                self.out.push(html::element("li", &content));
            }
            LineKind::Paragraph { text } => {
                self.flush_table();
                self.close_list();
                let content = format_inline(text, InlineStyle::StrongAndEmphasis);
                self.out.push(html::element("p", &content));
            }
        }
    }

    fn open_list(&mut self) {
        if !matches!(self.open, OpenBlock::List) {
            self.out.push(LIST_OPEN.to_string());
            self.open = OpenBlock::List;
        }
    }

    fn close_list(&mut self) {
        if matches!(self.open, OpenBlock::List) {
            self.out.push(LIST_CLOSE.to_string());
            self.open = OpenBlock::None;
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBlock::Table(table) = prev {
            log::debug!(
                "flushing table: {} header cells, {} rows",
                table.headers.len(),
                table.rows.len()
            );
            if !table.is_empty() {
                self.out.push(table.render());
            }
        } else {
            self.open = prev; // put back a non-table block (e.g. list)
        }
    }
}
