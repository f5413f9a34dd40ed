//! Turning fetched pages into links and listing records.

pub mod attributes;
pub mod category;
pub mod detail;
pub mod index;
pub mod vocabulary;

pub use detail::build_record;
pub use index::parse_index_page;
