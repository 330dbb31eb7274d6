/// Application layer - Use cases, DTOs and read models
///
/// Orchestrates the catalog core and reaches infrastructure only through the
/// outbound ports.
pub mod build_session;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

pub use build_session::BuildSession;
