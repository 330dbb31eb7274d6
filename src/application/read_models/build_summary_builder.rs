//! Builder for constructing BuildSummary from a build

use super::build_summary::{BuildLine, BuildSummary};
use super::component_view::ComponentView;
use crate::catalog::domain::Category;
use crate::catalog::policies::CompatibilityAdvisor;
use crate::catalog::services::BuildAccumulator;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct BuildSummaryBuilder;

impl BuildSummaryBuilder {
    pub fn build(
        build: &BuildAccumulator,
        build_id: Uuid,
        updated_at: DateTime<Utc>,
    ) -> BuildSummary {
        let lines: Vec<BuildLine> = Category::ALL
            .into_iter()
            .map(|category| BuildLine {
                category,
                label: category.display_name().to_string(),
                component: build.get(category).map(ComponentView::from_record),
            })
            .collect();

        let prices: Vec<Option<f64>> = lines
            .iter()
            .filter_map(|line| line.component.as_ref())
            .map(|c| c.price)
            .collect();
        // An empty f64 sum is -0.0
        let total_price = prices.iter().flatten().fold(0.0, |acc, p| acc + p);
        let unpriced_parts = prices.iter().filter(|p| p.is_none()).count();

        BuildSummary {
            build_id,
            updated_at,
            lines,
            total_price,
            unpriced_parts,
            missing_categories: build.missing_categories(),
            notes: CompatibilityAdvisor::review(build),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{ComponentAttributes, ComponentId, ComponentRecord, Price};
    use serde_json::json;

    fn part(category: Category, id: &str, price: Option<f64>, attrs: serde_json::Value) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new(id.to_string()).unwrap(),
            id.to_uppercase(),
            "Brand".to_string(),
            price.map(|p| Price::new(p).unwrap()),
            ComponentAttributes::from_json(category, attrs).unwrap(),
        )
    }

    #[test]
    fn test_empty_build_summary() {
        let summary = BuildSummaryBuilder::build(&BuildAccumulator::new(), Uuid::new_v4(), Utc::now());
        assert_eq!(summary.lines.len(), Category::ALL.len());
        assert_eq!(summary.selected_count(), 0);
        assert_eq!(summary.total_price, 0.0);
        assert!(summary.total_price.is_sign_positive());
        assert_eq!(summary.missing_categories, Category::ALL.to_vec());
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_totals_skip_unpriced_parts() {
        let mut build = BuildAccumulator::new();
        build.set(Category::Cpu, part(Category::Cpu, "cpu-1", Some(199.99), json!({})));
        build.set(Category::Gpu, part(Category::Gpu, "gpu-1", Some(549.0), json!({})));
        build.set(Category::Case, part(Category::Case, "case-1", None, json!({})));

        let summary = BuildSummaryBuilder::build(&build, Uuid::new_v4(), Utc::now());
        assert!((summary.total_price - 748.99).abs() < 1e-9);
        assert_eq!(summary.unpriced_parts, 1);
        assert_eq!(summary.selected_count(), 3);
        assert!(!summary.missing_categories.contains(&Category::Gpu));
        assert_eq!(summary.lines[0].category, Category::Cpu);
        assert_eq!(summary.lines[0].component.as_ref().unwrap().id, "cpu-1");
    }

    #[test]
    fn test_all_unpriced_total_is_positive_zero() {
        let mut build = BuildAccumulator::new();
        build.set(Category::Case, part(Category::Case, "case-1", None, json!({})));

        let summary = BuildSummaryBuilder::build(&build, Uuid::new_v4(), Utc::now());
        assert!(summary.total_price.is_sign_positive());
        assert_eq!(format!("{:.2}", summary.total_price), "0.00");
        assert_eq!(summary.unpriced_parts, 1);
    }

    #[test]
    fn test_summary_carries_compatibility_notes() {
        let mut build = BuildAccumulator::new();
        build.set(Category::Cpu, part(Category::Cpu, "cpu-1", None, json!({"socket": "AM5"})));
        build.set(
            Category::Motherboard,
            part(Category::Motherboard, "mb-1", None, json!({"socket": "LGA1700"})),
        );

        let summary = BuildSummaryBuilder::build(&build, Uuid::new_v4(), Utc::now());
        assert!(summary.has_notes());
        assert_eq!(summary.notes[0].first, Category::Cpu);
    }
}
