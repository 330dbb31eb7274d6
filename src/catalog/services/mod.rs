pub mod build_accumulator;
pub mod catalog_filter;
pub mod catalog_parser;
pub mod catalog_sorter;
pub mod paginator;

pub use build_accumulator::BuildAccumulator;
pub use catalog_filter::CatalogFilter;
pub use catalog_parser::{CatalogFormat, CatalogParser};
pub use catalog_sorter::{CatalogSorter, SortOrder};
pub use paginator::{Page, PageRequest, Paginator, DEFAULT_PAGE_SIZE};
