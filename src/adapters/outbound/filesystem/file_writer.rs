use crate::ports::outbound::OutputPresenter;
use crate::shared::error::BuildError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `content` to `path` through a temp file in the same directory, so
/// readers never observe a half-written file.
///
/// The parent directory must exist and `path` must not be a symlink.
pub(crate) fn write_atomically(path: &Path, content: &str, file_description: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(BuildError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Parent directory does not exist: {}", parent.display()),
        }
        .into());
    }
    reject_symlink(path, file_description)?;

    let write_error = |e: io::Error| BuildError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    };
    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// FileSystemWriter adapter presenting reports into a file (`-o FILE`)
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        write_atomically(&self.output_path, content, "Output file")?;
        tracing::debug!(path = %self.output_path.display(), bytes = content.len(), "report written");
        eprintln!("✅ Output written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter, the default destination
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build.md");
        fs::write(&output_path, "old and much longer content").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/output.json"));
        let err = writer.present("test content").unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.md");
        let link = temp_dir.path().join("link.md");
        fs::write(&real, "keep").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = FileSystemWriter::new(link).present("overwrite").unwrap_err();
        assert!(err.to_string().contains("Security violation"));
        assert_eq!(fs::read_to_string(real).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("test output\n").is_ok());
    }
}
