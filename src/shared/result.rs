/// Result alias used across the crate; errors are `anyhow::Error` so adapters
/// can attach context while domain errors stay typed as [`super::error::BuildError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
