//! # Block Rendering
//!
//! Two-phase, single-pass block rendering over a line-oriented markdown subset.
//!
//! ## Rendering Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and mapped to
//!    exactly one `LineKind` using line-local precedence rules only
//!
//! 2. **Block Accumulation** (`builder`): a `RenderState` is folded over the
//!    classified lines, tracking the open block (none, list, table) and
//!    emitting markup fragments as blocks open and close
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned delimiters (Heading, ListItem, TableRow)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineKind` for each line
//! - **`table`**: `Table` accumulator and the standalone `build_table`
//! - **`builder`**: `RenderState` state machine for block emission
//!
//! ## Key Invariants
//!
//! - No lookahead: the first table row seen outside a table is the header
//! - Separator rows are consumed silently and never become a header or a row
//! - At most one block is open; any competing block start closes it first
//! - End of input flushes the open block, so nothing is silently dropped

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod table;

pub use builder::{OpenBlock, RenderState};
pub use classify::{LineKind, MarkdownLineClassifier, classify};
pub use table::{TABLE_CLASS, Table, build_table};
