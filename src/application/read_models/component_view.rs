//! Component view structs for read models
//!
//! Flattened, display-ready copies of component records.

use crate::catalog::domain::{AttributeSet, Category, ComponentRecord, FacetKind, FacetSpec};
use serde::Serialize;

/// View representation of a component record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub brand: String,
    /// `None` when the catalog lists no current price
    pub price: Option<f64>,
    /// Present attributes in facet-schema order
    pub attributes: Vec<AttributeView>,
}

/// One labelled attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeView {
    pub field: String,
    pub label: String,
    pub value: String,
}

impl ComponentView {
    pub fn from_record(record: &ComponentRecord) -> Self {
        let attributes = record
            .category()
            .attribute_facets()
            .iter()
            .filter_map(|spec| {
                display_value(record, spec).map(|value| AttributeView {
                    field: spec.field.to_string(),
                    label: spec.label.to_string(),
                    value,
                })
            })
            .collect();

        Self {
            id: record.id().to_string(),
            category: record.category(),
            name: record.name().to_string(),
            brand: record.brand().to_string(),
            price: record.price().map(|p| p.amount()),
            attributes,
        }
    }

    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

/// Renders one facet of a record, `None` if the record lacks it
pub fn display_value(record: &ComponentRecord, spec: &FacetSpec) -> Option<String> {
    match spec.kind {
        FacetKind::Range if spec.field == "price" => {
            record.price().map(|p| p.to_string())
        }
        FacetKind::Range => record.number(spec.field).map(format_number),
        FacetKind::Select => record.text(spec.field).map(|v| v.to_display()),
        FacetKind::Flag => record
            .flag(spec.field)
            .map(|f| if f { "Yes" } else { "No" }.to_string()),
    }
}

/// Whole numbers print without a fractional part
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(amount) => format!("${:.2}", amount),
        None => "N/A".to_string(),
    }
}
