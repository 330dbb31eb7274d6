use crate::catalog::domain::Category;
use crate::shared::error::BuildError;
use crate::shared::Result;

/// Minimum number of components in a comparison
pub const MIN_COMPARED: usize = 2;

/// Request to compare components of one category side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    pub category: Category,
    pub ids: Vec<String>,
}

impl CompareRequest {
    pub fn new(category: Category, ids: Vec<String>) -> Result<Self> {
        if ids.len() < MIN_COMPARED {
            return Err(BuildError::Validation {
                message: format!(
                    "Comparing needs at least {} component ids, got {}",
                    MIN_COMPARED,
                    ids.len()
                ),
            }
            .into());
        }
        Ok(Self { category, ids })
    }
}
