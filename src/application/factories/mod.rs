mod catalog_source_factory;
mod formatter_factory;
mod presenter_factory;

pub use catalog_source_factory::{CatalogSourceFactory, SourceSettings};
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
