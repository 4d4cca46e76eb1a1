pub mod heading;
pub mod list_item;
pub mod table_row;

pub use heading::Heading;
pub use list_item::ListItem;
pub use table_row::TableRow;
