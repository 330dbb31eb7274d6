/// Shared helpers for integration tests
pub mod mocks;

use std::path::PathBuf;

/// Directory with one fixture catalog per category
pub fn fixture_catalog_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog")
}
