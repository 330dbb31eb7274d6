/// Filesystem adapters: catalog bundles, the saved build, report files
mod build_store;
mod catalog_reader;
mod file_writer;

pub use build_store::FileSystemBuildStore;
pub use catalog_reader::FileSystemCatalogReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
