/// Use cases module containing application business logic orchestration
mod browse_catalog;
mod compare_components;
mod manage_build;

pub use browse_catalog::BrowseCatalogUseCase;
pub use compare_components::CompareComponentsUseCase;
pub use manage_build::ManageBuildUseCase;
