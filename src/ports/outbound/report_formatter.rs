use crate::application::read_models::{BuildSummary, CatalogPageView, ComparisonView, FacetsView};
use crate::shared::Result;

/// ReportFormatter port for rendering read models
///
/// One implementation per output format (JSON, Markdown). Formatters are
/// pure: they never touch the output destination.
pub trait ReportFormatter {
    fn format_page(&self, view: &CatalogPageView) -> Result<String>;

    fn format_facets(&self, view: &FacetsView) -> Result<String>;

    fn format_build(&self, summary: &BuildSummary) -> Result<String>;

    fn format_comparison(&self, view: &ComparisonView) -> Result<String>;
}
