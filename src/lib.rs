//! pc-builder - PC component catalog browsing and build assembly
//!
//! This library loads per-category hardware catalogs, filters, sorts and
//! pages them, and keeps a single build (at most one component per
//! category) with its running total and compatibility notes. It follows a
//! hexagonal layout.
//!
//! # Architecture
//!
//! - **Catalog core** (`catalog`): component records, filter criteria, the
//!   filter/sort/paginate pipeline, the build accumulator and compatibility policy
//! - **Application Layer** (`application`): use cases, the shared build session,
//!   DTOs and read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): catalog files, HTTP catalog server, build file,
//!   console and report formatters
//! - **Shared** (`shared`): error types, result alias and file security checks
//!
//! # Example
//!
//! ```no_run
//! use pc_builder::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let source = FileSystemCatalogReader::new("catalog");
//! let use_case = BrowseCatalogUseCase::new(source, StderrProgressReporter::new());
//!
//! let criteria = FilterCriteria::new()
//!     .with_search("ryzen")
//!     .with_range("price", None, Some(300.0))
//!     .with_selection("socket", ["AM5"]);
//! let request = BrowseRequest::new(Category::Cpu)
//!     .with_criteria(criteria)
//!     .with_sort(SortOrder::PriceAsc);
//!
//! let page = use_case.execute(request).await?;
//! println!("{}", MarkdownFormatter::new().format_page(&page)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{BuildEventReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemBuildStore, FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingCatalogSource, FallbackCatalogSource, HttpCatalogClient,
    };
    pub use crate::application::build_session::BuildSession;
    pub use crate::application::dto::{
        BrowseRequest, BuildCommand, BuildResponse, CompareRequest, OutputFormat,
    };
    pub use crate::application::read_models::{
        BuildSummary, CatalogPageView, ComparisonView, ComponentView, FacetsView,
    };
    pub use crate::application::use_cases::{
        BrowseCatalogUseCase, CompareComponentsUseCase, ManageBuildUseCase,
    };
    pub use crate::catalog::domain::{
        BuildEvent, BuildSnapshot, Catalog, Category, ComponentId, ComponentRecord,
        FilterCriteria, Price,
    };
    pub use crate::catalog::policies::{CompatibilityAdvisor, CompatibilityNote};
    pub use crate::catalog::services::{
        BuildAccumulator, CatalogFilter, CatalogSorter, Page, PageRequest, Paginator, SortOrder,
    };
    pub use crate::ports::outbound::{
        BuildObserver, BuildStore, CatalogSource, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
