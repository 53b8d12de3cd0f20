//! Higher-level components built from the element primitives.
//!
//! Custom elements ([`FlexItems`], [`TitleValues`], [`NavLinks`]) write their
//! definition once per document in the Requirements phase and are styled
//! through atomic classes from a [`ClassRegistry`](crate::style::ClassRegistry).

mod details_summary;
mod flex_items;
mod iframe_expand;
mod nav_links;
mod page;
mod table;
mod title_values;

pub use details_summary::DetailsSummary;
pub use flex_items::FlexItems;
pub use iframe_expand::IframeExpand;
pub use nav_links::{NavLinks, Target};
pub use page::{Page, PageConfig};
pub use table::Table;
pub use title_values::TitleValues;
