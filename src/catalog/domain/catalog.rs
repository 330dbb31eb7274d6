use super::category::Category;
use super::component::{ComponentId, ComponentRecord};
use crate::shared::error::BuildError;
use crate::shared::Result;
use std::collections::HashSet;

/// Ordered component list for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    category: Category,
    records: Vec<ComponentRecord>,
}

impl Catalog {
    /// Creates a catalog, enforcing unique ids and a matching category on
    /// every record. Input order is kept.
    pub fn new(category: Category, records: Vec<ComponentRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.category() != category {
                return Err(BuildError::Validation {
                    message: format!(
                        "Record '{}' belongs to {}, not to the {} catalog",
                        record.id(),
                        record.category(),
                        category
                    ),
                }
                .into());
            }
            if !seen.insert(record.id().as_str()) {
                return Err(BuildError::DuplicateComponentId {
                    category: category.key().to_string(),
                    id: record.id().to_string(),
                }
                .into());
            }
        }

        Ok(Self { category, records })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &ComponentId) -> Option<&ComponentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Like [`Catalog::find`] but reports a missing id as an error
    pub fn require(&self, id: &ComponentId) -> Result<&ComponentRecord> {
        self.find(id).ok_or_else(|| {
            BuildError::ComponentNotFound {
                category: self.category.key().to_string(),
                id: id.to_string(),
            }
            .into()
        })
    }

    pub fn into_records(self) -> Vec<ComponentRecord> {
        self.records
    }
}
