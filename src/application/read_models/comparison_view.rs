//! Side-by-side comparison of components from one category

use super::component_view::display_value;
use crate::catalog::domain::{Category, ComponentRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub category: Category,
    pub columns: Vec<ComparisonColumn>,
    /// One row per facet in schema order; cells follow `columns`
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub field: String,
    pub label: String,
    /// `None` where the component lacks the attribute
    pub values: Vec<Option<String>>,
}

impl ComparisonRow {
    /// True when every component has the same value (or all lack it)
    pub fn is_uniform(&self) -> bool {
        self.values.windows(2).all(|w| w[0] == w[1])
    }
}

impl ComparisonView {
    pub fn from_records(category: Category, records: &[&ComponentRecord]) -> Self {
        let columns = records
            .iter()
            .map(|r| ComparisonColumn {
                id: r.id().to_string(),
                name: r.name().to_string(),
            })
            .collect();

        let rows = category
            .facets()
            .map(|spec| ComparisonRow {
                field: spec.field.to_string(),
                label: spec.label.to_string(),
                values: records.iter().map(|r| display_value(r, spec)).collect(),
            })
            .collect();

        Self {
            category,
            columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{ComponentAttributes, ComponentId, Price};
    use serde_json::json;

    fn psu(id: &str, price: f64, attrs: serde_json::Value) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new(id.to_string()).unwrap(),
            format!("PSU {}", id),
            "Corsair".to_string(),
            Some(Price::new(price).unwrap()),
            ComponentAttributes::from_json(Category::Psu, attrs).unwrap(),
        )
    }

    #[test]
    fn test_rows_follow_facet_schema() {
        let a = psu("a", 99.99, json!({"wattage": 750, "modular": "Full"}));
        let b = psu("b", 129.99, json!({"wattage": 850}));
        let view = ComparisonView::from_records(Category::Psu, &[&a, &b]);

        assert_eq!(view.columns.len(), 2);
        let fields: Vec<_> = view.rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields[..3], ["price", "brand", "wattage"]);

        let brand = &view.rows[1];
        assert!(brand.is_uniform());

        let modular = view.rows.iter().find(|r| r.field == "modular").unwrap();
        assert_eq!(modular.values, vec![Some("Full".to_string()), None]);
        assert!(!modular.is_uniform());
    }
}
