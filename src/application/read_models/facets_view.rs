//! Read model describing what each facet of a category can filter on

use crate::catalog::domain::{AttributeSet, Catalog, Category, FacetKind, FacetSpec, TextValue};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetsView {
    pub category: Category,
    pub total_items: usize,
    pub facets: Vec<FacetView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetView {
    pub field: String,
    pub label: String,
    #[serde(flatten)]
    pub summary: FacetSummary,
    /// Records without this attribute (they pass any filter on it)
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FacetSummary {
    Range { min: Option<f64>, max: Option<f64> },
    Select { options: Vec<FacetOption> },
    Flag { yes: usize, no: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

impl FacetsView {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let facets = catalog
            .category()
            .facets()
            .map(|spec| Self::summarize(catalog, spec))
            .collect();

        Self {
            category: catalog.category(),
            total_items: catalog.len(),
            facets,
        }
    }

    fn summarize(catalog: &Catalog, spec: &FacetSpec) -> FacetView {
        let records = catalog.records();
        let (summary, missing) = match spec.kind {
            FacetKind::Range => {
                let values: Vec<f64> = records.iter().filter_map(|r| r.number(spec.field)).collect();
                let min = values.iter().copied().reduce(f64::min);
                let max = values.iter().copied().reduce(f64::max);
                (FacetSummary::Range { min, max }, records.len() - values.len())
            }
            FacetKind::Select => {
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                let mut missing = 0;
                for record in records {
                    match record.text(spec.field) {
                        Some(TextValue::One(v)) => *counts.entry(v).or_default() += 1,
                        Some(TextValue::Many(vs)) => {
                            for v in vs {
                                *counts.entry(v.as_str()).or_default() += 1;
                            }
                        }
                        None => missing += 1,
                    }
                }
                let options = counts
                    .into_iter()
                    .map(|(value, count)| FacetOption {
                        value: value.to_string(),
                        count,
                    })
                    .collect();
                (FacetSummary::Select { options }, missing)
            }
            FacetKind::Flag => {
                let (mut yes, mut no, mut missing) = (0, 0, 0);
                for record in records {
                    match record.flag(spec.field) {
                        Some(true) => yes += 1,
                        Some(false) => no += 1,
                        None => missing += 1,
                    }
                }
                (FacetSummary::Flag { yes, no }, missing)
            }
        };

        FacetView {
            field: spec.field.to_string(),
            label: spec.label.to_string(),
            summary,
            missing,
        }
    }
}
