use crate::catalog::domain::{Catalog, Category};
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogSource port for loading a category's component catalog
///
/// Implementations may read local bundles or call a remote service.
/// They must be `Send + Sync` so decorators can share them across tasks.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every record of `category`
    ///
    /// # Errors
    /// Returns an error if the catalog is unavailable, malformed, or contains
    /// duplicate ids.
    async fn load_catalog(&self, category: Category) -> Result<Catalog>;

    /// Short human-readable name of the source, used in log and progress output
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        (**self).load_catalog(category).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
