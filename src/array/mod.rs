//! List containers with numpy / torch style indexing.

mod doc_list;
mod index;
mod list;

pub use doc_list::DocList;
pub use index::{Index, Positions, Slice};
pub use list::{ListAdvancedIndexing, Selection};
