use crate::catalog::domain::{Catalog, Category};
use crate::catalog::services::{CatalogFormat, CatalogParser};
use crate::ports::outbound::CatalogSource;
use crate::shared::error::BuildError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// FileSystemCatalogReader adapter for local catalog bundles
///
/// Looks for `<dir>/<category>.json`, then `<dir>/<category>.toml`.
#[derive(Debug, Clone)]
pub struct FileSystemCatalogReader {
    catalog_dir: PathBuf,
}

impl FileSystemCatalogReader {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    fn locate(&self, category: Category) -> Option<(PathBuf, CatalogFormat)> {
        [CatalogFormat::Json, CatalogFormat::Toml]
            .into_iter()
            .map(|format| {
                let path = self
                    .catalog_dir
                    .join(format!("{}.{}", category.key(), format.extension()));
                (path, format)
            })
            .find(|(path, _)| path.symlink_metadata().is_ok())
    }

    fn read_catalog(&self, category: Category) -> Result<Catalog> {
        let (path, format) = self.locate(category).ok_or_else(|| BuildError::CatalogNotFound {
            category: category.key().to_string(),
            path: self
                .catalog_dir
                .join(format!("{}.{}", category.key(), CatalogFormat::Json.extension())),
        })?;

        let content = read_regular_file(&path, "Catalog file")?;
        let catalog = CatalogParser::parse(category, &content, format).map_err(|e| {
            if matches!(
                e.downcast_ref::<BuildError>(),
                Some(BuildError::DuplicateComponentId { .. })
            ) {
                return e;
            }
            BuildError::CatalogParseError {
                path: path.clone(),
                details: format!("{:#}", e),
            }
            .into()
        })?;

        tracing::debug!(
            category = %category,
            path = %path.display(),
            records = catalog.len(),
            "catalog loaded from disk"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for FileSystemCatalogReader {
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        self.read_catalog(category)
    }

    fn describe(&self) -> String {
        format!("catalog directory {}", self.catalog_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_json_catalog() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("gpu.json"),
            r#"[{"id": "g1", "name": "RTX 4070", "brand": "NVIDIA", "price": 549.0}]"#,
        )
        .unwrap();

        let reader = FileSystemCatalogReader::new(dir.path());
        let catalog = reader.load_catalog(Category::Gpu).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.category(), Category::Gpu);
    }

    #[tokio::test]
    async fn test_load_toml_catalog_when_no_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("psu.toml"),
            "[[component]]\nid = \"p1\"\nname = \"RM850x\"\nwattage = 850\n",
        )
        .unwrap();

        let catalog = FileSystemCatalogReader::new(dir.path())
            .load_catalog(Category::Psu)
            .await
            .unwrap();
        assert_eq!(catalog.records()[0].name(), "RM850x");
    }

    #[tokio::test]
    async fn test_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let err = FileSystemCatalogReader::new(dir.path())
            .load_catalog(Category::Case)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Catalog for 'case' not found"));
    }

    #[tokio::test]
    async fn test_malformed_catalog_reports_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cpu.json"), r#"[{"id": "c1"}]"#).unwrap();

        let err = FileSystemCatalogReader::new(dir.path())
            .load_catalog(Category::Cpu)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse catalog"));
        assert!(message.contains("cpu.json"));
        assert!(message.contains("missing 'name'"));
    }

    #[tokio::test]
    async fn test_object_without_components_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("psu.json"),
            r#"{"items": [{"id": "p1", "name": "RM750e"}]}"#,
        )
        .unwrap();

        let err = FileSystemCatalogReader::new(dir.path())
            .load_catalog(Category::Psu)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse catalog"));
        assert!(message.contains("no 'components' array"));
    }

    #[tokio::test]
    async fn test_duplicate_id_keeps_domain_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cpu.json"),
            r#"[{"id": "c1", "name": "A"}, {"id": "c1", "name": "B"}]"#,
        )
        .unwrap();

        let err = FileSystemCatalogReader::new(dir.path())
            .load_catalog(Category::Cpu)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::DuplicateComponentId { .. })
        ));
    }
}
