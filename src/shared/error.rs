use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// `show --strict` found compatibility warnings in the build
    CompatibilityWarnings = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CompatibilityWarnings => write!(f, "Compatibility Warnings (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for catalog loading and build management.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Catalog for '{category}' not found: {path}\n\n💡 Hint: Provide <category>.json or <category>.toml in the catalog directory, or set --catalog-dir")]
    CatalogNotFound { category: String, path: PathBuf },

    #[error("Failed to parse catalog: {path}\nDetails: {details}\n\n💡 Hint: Each record needs at least an 'id' and a 'name' field")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Duplicate component id '{id}' in the {category} catalog\n\n💡 Hint: Component ids must be unique within a category")]
    DuplicateComponentId { category: String, id: String },

    #[error("No {category} component with id '{id}'\n\n💡 Hint: Run `pc-builder list {category}` to see available ids")]
    ComponentNotFound { category: String, id: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CompatibilityWarnings.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::CompatibilityWarnings),
            "Compatibility Warnings (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_catalog_not_found_display() {
        let error = BuildError::CatalogNotFound {
            category: "cpu".to_string(),
            path: PathBuf::from("/catalog/cpu.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Catalog for 'cpu' not found"));
        assert!(display.contains("/catalog/cpu.json"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_duplicate_component_id_display() {
        let error = BuildError::DuplicateComponentId {
            category: "case".to_string(),
            id: "case-1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Duplicate component id 'case-1'"));
        assert!(display.contains("case catalog"));
    }

    #[test]
    fn test_component_not_found_display() {
        let error = BuildError::ComponentNotFound {
            category: "gpu".to_string(),
            id: "gpu-404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No gpu component with id 'gpu-404'"));
        assert!(display.contains("pc-builder list gpu"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BuildError::FileWriteError {
            path: PathBuf::from("/test/build.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = BuildError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
