use crate::catalog::domain::{Catalog, Category};
use crate::ports::outbound::CatalogSource;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// CachingCatalogSource wraps a CatalogSource with an in-memory cache
///
/// Each category is loaded at most once per process; failures are not
/// cached, so a later call retries the inner source.
pub struct CachingCatalogSource<S: CatalogSource> {
    inner: S,
    cache: DashMap<Category, Catalog>,
}

impl<S: CatalogSource> CachingCatalogSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    pub fn cached_categories(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachingCatalogSource<S> {
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        if let Some(cached) = self.cache.get(&category) {
            tracing::debug!(category = %category, "catalog cache hit");
            return Ok(cached.clone());
        }

        let catalog = self.inner.load_catalog(category).await?;
        self.cache.insert(category, catalog.clone());
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts loads and fails for GPUs
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn load_catalog(&self, category: Category) -> Result<Catalog> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if category == Category::Gpu {
                anyhow::bail!("gpu catalog offline");
            }
            Catalog::new(category, Vec::new())
        }

        fn describe(&self) -> String {
            "counting source".to_string()
        }
    }

    #[tokio::test]
    async fn test_second_load_is_served_from_cache() {
        let source = CachingCatalogSource::new(CountingSource {
            calls: AtomicUsize::new(0),
        });

        source.load_catalog(Category::Cpu).await.unwrap();
        source.load_catalog(Category::Cpu).await.unwrap();
        source.load_catalog(Category::Case).await.unwrap();

        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.cached_categories(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = CachingCatalogSource::new(CountingSource {
            calls: AtomicUsize::new(0),
        });

        assert!(source.load_catalog(Category::Gpu).await.is_err());
        assert!(source.load_catalog(Category::Gpu).await.is_err());

        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.cached_categories(), 0);
    }

    #[test]
    fn test_describe_delegates() {
        let source = CachingCatalogSource::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        assert_eq!(source.describe(), "counting source");
    }
}
