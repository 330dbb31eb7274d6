use crate::adapters::outbound::filesystem::FileSystemCatalogReader;
use crate::adapters::outbound::network::{
    CachingCatalogSource, FallbackCatalogSource, HttpCatalogClient,
};
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

/// Where catalogs come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Local bundle directory; always present as the fallback
    pub catalog_dir: PathBuf,
    /// Optional catalog server tried before the local bundle
    pub catalog_url: Option<String>,
}

/// Factory assembling the catalog source stack
///
/// Without a URL: cache → local bundle.
/// With a URL: cache → fallback(HTTP, local bundle).
pub struct CatalogSourceFactory;

impl CatalogSourceFactory {
    pub fn create<R>(settings: &SourceSettings, reporter: R) -> Result<Box<dyn CatalogSource>>
    where
        R: ProgressReporter + 'static,
    {
        let local = FileSystemCatalogReader::new(settings.catalog_dir.clone());

        let source: Box<dyn CatalogSource> = match &settings.catalog_url {
            Some(url) => {
                let remote = HttpCatalogClient::new(url)?;
                Box::new(CachingCatalogSource::new(FallbackCatalogSource::new(
                    remote, local, reporter,
                )))
            }
            None => Box::new(CachingCatalogSource::new(local)),
        };

        tracing::debug!(source = %source.describe(), "catalog source ready");
        Ok(source)
    }
}
