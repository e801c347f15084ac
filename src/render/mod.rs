//! Server-side HTML generation.

pub mod columns;
pub mod layout;
pub mod pages;
pub mod search;
pub mod table;

pub use columns::{CellValue, Column, FieldKind, Tabular};
pub use layout::{escape, page};
pub use pages::{index_page, info_page, table_index_page};
pub use search::{search_form_page, search_results_page};
pub use table::render_table;
