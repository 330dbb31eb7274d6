//! Build summary read model
//!
//! One line per category in builder order, the running total, and the
//! advisory compatibility notes.

use super::component_view::ComponentView;
use crate::catalog::domain::Category;
use crate::catalog::policies::CompatibilityNote;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSummary {
    pub build_id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub lines: Vec<BuildLine>,
    /// Sum of known prices
    pub total_price: f64,
    /// Selected parts without a price, excluded from `total_price`
    pub unpriced_parts: usize,
    pub missing_categories: Vec<Category>,
    pub notes: Vec<CompatibilityNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildLine {
    pub category: Category,
    pub label: String,
    pub component: Option<ComponentView>,
}

impl BuildSummary {
    pub fn selected_count(&self) -> usize {
        self.lines.iter().filter(|l| l.component.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_categories.is_empty()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}
