use crate::catalog::domain::{Catalog, Category};
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;

/// FallbackCatalogSource serves a local bundle when the primary source fails
///
/// The failure is reported as a warning, never surfaced as an error, unless
/// the fallback fails as well.
pub struct FallbackCatalogSource<P, F, R> {
    primary: P,
    fallback: F,
    reporter: R,
}

impl<P, F, R> FallbackCatalogSource<P, F, R>
where
    P: CatalogSource,
    F: CatalogSource,
    R: ProgressReporter,
{
    pub fn new(primary: P, fallback: F, reporter: R) -> Self {
        Self {
            primary,
            fallback,
            reporter,
        }
    }
}

#[async_trait]
impl<P, F, R> CatalogSource for FallbackCatalogSource<P, F, R>
where
    P: CatalogSource,
    F: CatalogSource,
    R: ProgressReporter,
{
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        match self.primary.load_catalog(category).await {
            Ok(catalog) => Ok(catalog),
            Err(e) => {
                tracing::debug!(category = %category, error = %format!("{:#}", e), "primary catalog source failed");
                self.reporter.report_error(&format!(
                    "⚠️  Warning: {} unavailable for {} ({}). Using {}.",
                    self.primary.describe(),
                    category.display_name(),
                    e,
                    self.fallback.describe()
                ));
                self.fallback.load_catalog(category).await
            }
        }
    }

    fn describe(&self) -> String {
        format!(
            "{} (falling back to {})",
            self.primary.describe(),
            self.fallback.describe()
        )
    }
}
