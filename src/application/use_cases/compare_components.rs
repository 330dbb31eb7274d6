use crate::application::dto::CompareRequest;
use crate::application::read_models::ComparisonView;
use crate::catalog::domain::ComponentId;
use crate::ports::outbound::CatalogSource;
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// CompareComponentsUseCase - side-by-side specs for components of one category
pub struct CompareComponentsUseCase<S> {
    source: S,
}

impl<S: CatalogSource> CompareComponentsUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Columns follow the order of `request.ids`
    pub async fn execute(&self, request: CompareRequest) -> Result<ComparisonView> {
        let ids = request
            .ids
            .iter()
            .map(|id| ComponentId::new(id.clone()))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = ids.iter().find(|id| !seen.insert(*id)) {
            return Err(BuildError::Validation {
                message: format!("Component '{}' is listed more than once", duplicate),
            }
            .into());
        }

        let catalog = self.source.load_catalog(request.category).await?;
        let records = ids
            .iter()
            .map(|id| catalog.require(id))
            .collect::<Result<Vec<_>>>()?;

        Ok(ComparisonView::from_records(request.category, &records))
    }
}
