//! Read models for CQRS-lite pattern
//!
//! View-optimized structs derived from catalogs and builds. Formatters only
//! ever see these, never the domain types.

pub mod build_summary;
pub mod build_summary_builder;
pub mod catalog_page_view;
pub mod comparison_view;
pub mod component_view;
pub mod facets_view;

pub use build_summary::{BuildLine, BuildSummary};
pub use build_summary_builder::BuildSummaryBuilder;
pub use catalog_page_view::CatalogPageView;
pub use comparison_view::{ComparisonColumn, ComparisonRow, ComparisonView};
pub use component_view::{AttributeView, ComponentView};
pub use facets_view::{FacetOption, FacetSummary, FacetView, FacetsView};
