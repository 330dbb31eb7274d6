/// Catalog source adapters: HTTP client and source decorators
mod caching_catalog_source;
mod fallback_catalog_source;
mod http_catalog_client;

pub use caching_catalog_source::CachingCatalogSource;
pub use fallback_catalog_source::FallbackCatalogSource;
pub use http_catalog_client::HttpCatalogClient;
