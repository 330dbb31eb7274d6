use crate::application::dto::BrowseRequest;
use crate::application::read_models::{CatalogPageView, ComponentView, FacetsView};
use crate::catalog::domain::{Catalog, Category, FilterCriteria};
use crate::catalog::services::{CatalogFilter, CatalogSorter, Paginator};
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;

/// BrowseCatalogUseCase - one category page: filter, sort, paginate
///
/// # Type Parameters
/// * `S` - CatalogSource implementation
/// * `R` - ProgressReporter implementation
pub struct BrowseCatalogUseCase<S, R> {
    source: S,
    reporter: R,
}

impl<S, R> BrowseCatalogUseCase<S, R>
where
    S: CatalogSource,
    R: ProgressReporter,
{
    pub fn new(source: S, reporter: R) -> Self {
        Self { source, reporter }
    }

    pub async fn execute(&self, request: BrowseRequest) -> Result<CatalogPageView> {
        let catalog = self.load(request.category).await?;
        self.warn_unknown_fields(request.category, &request.criteria);

        let filter = CatalogFilter::new(&request.criteria);
        let mut matches = filter.apply(catalog.records());
        CatalogSorter::sort(&mut matches, request.sort);

        let page = Paginator::paginate(matches, request.page).map(ComponentView::from_record);
        tracing::debug!(
            category = %request.category,
            matched = page.total_items,
            page = page.page,
            "catalog page built"
        );

        Ok(CatalogPageView::new(
            request.category,
            catalog.len(),
            &request.criteria,
            request.sort,
            page,
        ))
    }

    /// Filterable fields of `category` with the values present in its catalog
    pub async fn facets(&self, category: Category) -> Result<FacetsView> {
        let catalog = self.load(category).await?;
        Ok(FacetsView::from_catalog(&catalog))
    }

    async fn load(&self, category: Category) -> Result<Catalog> {
        self.reporter.report(&format!(
            "📖 Loading {} catalog from {}",
            category.display_name(),
            self.source.describe()
        ));
        self.source.load_catalog(category).await
    }

    /// Unknown fields never fail a query; they match every record. Say so,
    /// since it is usually a typo.
    fn warn_unknown_fields(&self, category: Category, criteria: &FilterCriteria) {
        for field in criteria.referenced_fields() {
            if category.facet(field).is_none() {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: '{}' is not a {} attribute; the filter matches every component.",
                    field,
                    category.display_name()
                ));
            }
        }
    }
}
