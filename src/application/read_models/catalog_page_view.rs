//! Read model for one filtered, sorted page of a category catalog

use super::component_view::{format_number, ComponentView};
use crate::catalog::domain::{Category, FilterCriteria, NumericRange};
use crate::catalog::services::{Page, SortOrder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPageView {
    pub category: Category,
    /// Records in the catalog before filtering
    pub catalog_size: usize,
    /// Human-readable description of each active criterion
    pub active_filters: Vec<String>,
    pub sort: SortOrder,
    pub page: Page<ComponentView>,
}

impl CatalogPageView {
    pub fn new(
        category: Category,
        catalog_size: usize,
        criteria: &FilterCriteria,
        sort: SortOrder,
        page: Page<ComponentView>,
    ) -> Self {
        Self {
            category,
            catalog_size,
            active_filters: describe_criteria(criteria),
            sort,
            page,
        }
    }
}

/// Renders active criteria as `field: value` lines
pub fn describe_criteria(criteria: &FilterCriteria) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(query) = criteria.search_query() {
        lines.push(format!("search: \"{}\"", query));
    }
    for (field, range) in criteria.ranges() {
        lines.push(format!("{}: {}", field, describe_range(range)));
    }
    for (field, values) in criteria.selections() {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        lines.push(format!("{}: {}", field, values.join(" | ")));
    }
    for (field, value) in criteria.flags() {
        lines.push(format!("{}: {}", field, if value { "yes" } else { "no" }));
    }
    lines
}

fn describe_range(range: &NumericRange) -> String {
    match (range.min, range.max) {
        (Some(min), Some(max)) => format!("{} to {}", format_number(min), format_number(max)),
        (Some(min), None) => format!(">= {}", format_number(min)),
        (None, Some(max)) => format!("<= {}", format_number(max)),
        (None, None) => "any".to_string(),
    }
}
