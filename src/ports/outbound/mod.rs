/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The application core reaches catalogs, the saved build, the console and
/// output destinations only through these traits.
pub mod build_observer;
pub mod build_store;
pub mod catalog_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use build_observer::BuildObserver;
pub use build_store::BuildStore;
pub use catalog_source::CatalogSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
