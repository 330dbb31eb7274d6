use crate::application::read_models::{BuildSummary, CatalogPageView, ComparisonView, FacetsView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter emitting read models as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_page(&self, view: &CatalogPageView) -> Result<String> {
        Self::to_json(view)
    }

    fn format_facets(&self, view: &FacetsView) -> Result<String> {
        Self::to_json(view)
    }

    fn format_build(&self, summary: &BuildSummary) -> Result<String> {
        Self::to_json(summary)
    }

    fn format_comparison(&self, view: &ComparisonView) -> Result<String> {
        Self::to_json(view)
    }
}
