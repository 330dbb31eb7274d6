use super::file_writer::write_atomically;
use crate::catalog::domain::BuildSnapshot;
use crate::ports::outbound::BuildStore;
use crate::shared::error::BuildError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemBuildStore adapter keeping the build in a JSON file
///
/// A missing file means no build has been saved yet.
#[derive(Debug, Clone)]
pub struct FileSystemBuildStore {
    path: PathBuf,
}

impl FileSystemBuildStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BuildStore for FileSystemBuildStore {
    fn load(&self) -> Result<Option<BuildSnapshot>> {
        if self.path.symlink_metadata().is_err() {
            tracing::debug!(path = %self.path.display(), "no saved build");
            return Ok(None);
        }

        let content = read_regular_file(&self.path, "Build file")?;
        let snapshot = serde_json::from_str(&content).map_err(|e| BuildError::FileReadError {
            path: self.path.clone(),
            details: format!("Build file is not a valid build: {}", e),
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &BuildSnapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;
        write_atomically(&self.path, &content, "Build file")?;
        tracing::debug!(
            path = %self.path.display(),
            parts = snapshot.selections.len(),
            "build saved"
        );
        Ok(())
    }
}
