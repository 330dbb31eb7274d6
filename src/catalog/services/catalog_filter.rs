use crate::catalog::domain::{AttributeSet, ComponentRecord, FilterCriteria};

/// CatalogFilter - Evaluates filter criteria against component records
///
/// A record is kept when every active facet matches it (AND across facets).
/// Inactive facets never exclude anything, and neither do missing or
/// unknown attributes: a record without the attribute a facet looks at
/// passes that facet. Output keeps input order.
///
/// The filter is pure and cheap enough to run on every keystroke.
#[derive(Debug, Clone)]
pub struct CatalogFilter<'c> {
    criteria: &'c FilterCriteria,
    /// Lowercased once so per-record matching does not repeat it
    search: Option<String>,
}

impl<'c> CatalogFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            search: criteria.search_query().map(str::to_lowercase),
        }
    }

    /// Borrowing variant: returns references to matching records in input order
    pub fn apply<'r>(&self, records: &'r [ComponentRecord]) -> Vec<&'r ComponentRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Owning variant of [`CatalogFilter::apply`]
    pub fn filter_records(&self, records: Vec<ComponentRecord>) -> Vec<ComponentRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    /// Checks one record against every active facet
    pub fn matches(&self, record: &ComponentRecord) -> bool {
        self.matches_search(record)
            && self.matches_ranges(record)
            && self.matches_selections(record)
            && self.matches_flags(record)
    }

    /// Case-insensitive substring match on name or brand
    fn matches_search(&self, record: &ComponentRecord) -> bool {
        let Some(query) = self.search.as_deref() else {
            return true;
        };
        record.name().to_lowercase().contains(query)
            || record.brand().to_lowercase().contains(query)
    }

    fn matches_ranges(&self, record: &ComponentRecord) -> bool {
        self.criteria
            .ranges()
            .all(|(field, range)| record.number(field).is_none_or(|v| range.contains(v)))
    }

    fn matches_selections(&self, record: &ComponentRecord) -> bool {
        self.criteria
            .selections()
            .all(|(field, allowed)| record.text(field).is_none_or(|v| v.intersects(allowed)))
    }

    fn matches_flags(&self, record: &ComponentRecord) -> bool {
        self.criteria
            .flags()
            .all(|(field, wanted)| record.flag(field).is_none_or(|v| v == wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{
        CaseAttributes, Category, ComponentAttributes, ComponentId, MemoryAttributes, Price,
    };

    fn case(id: &str, brand: &str, price: Option<f64>, colors: &[&str]) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new(id.to_string()).unwrap(),
            format!("{} {}", brand, id),
            brand.to_string(),
            price.map(|p| Price::new(p).unwrap()),
            ComponentAttributes::Case(CaseAttributes {
                color: colors.iter().map(|c| c.to_string()).collect(),
                ..Default::default()
            }),
        )
    }

    fn memory(id: &str, name: &str, speed: Option<f64>, rgb: Option<bool>) -> ComponentRecord {
        ComponentRecord::new(
            ComponentId::new(id.to_string()).unwrap(),
            name.to_string(),
            "G.Skill".to_string(),
            Some(Price::new(80.0).unwrap()),
            ComponentAttributes::Memory(MemoryAttributes {
                speed_mhz: speed,
                rgb,
                ..Default::default()
            }),
        )
    }

    fn six_cases() -> Vec<ComponentRecord> {
        vec![
            case("c1", "Corsair", Some(79.99), &["Black"]),
            case("c2", "NZXT", Some(89.99), &["White"]),
            case("c3", "Corsair", Some(149.99), &["Black", "White"]),
            case("c4", "Fractal Design", Some(99.0), &["Black"]),
            case("c5", "Corsair", Some(100.0), &["White"]),
            case("c6", "Lian Li", Some(59.99), &["Black"]),
        ]
    }

    fn ids(records: &[&ComponentRecord]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_unconstrained_returns_everything_in_order() {
        let records = six_cases();
        let criteria = FilterCriteria::default();
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["c1", "c2", "c3", "c4", "c5", "c6"]);
    }

    #[test]
    fn test_corsair_cases_up_to_100() {
        let records = six_cases();
        let criteria = FilterCriteria::new()
            .with_range("price", None, Some(100.0))
            .with_selection("brand", ["Corsair"]);
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["c1", "c5"]);
        assert!(result
            .iter()
            .all(|r| r.brand() == "Corsair" && r.price().unwrap().amount() <= 100.0));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_brand() {
        let records = six_cases();
        let by_brand = FilterCriteria::new().with_search("fractal");
        assert_eq!(
            ids(&CatalogFilter::new(&by_brand).apply(&records)),
            vec!["c4"]
        );

        let by_name = FilterCriteria::new().with_search("  LIAN LI C6 ");
        assert_eq!(ids(&CatalogFilter::new(&by_name).apply(&records)), vec!["c6"]);
    }

    #[test]
    fn test_multi_valued_attribute_matches_on_intersection() {
        let records = six_cases();
        let criteria = FilterCriteria::new().with_selection("color", ["White"]);
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["c2", "c3", "c5"]);
    }

    #[test]
    fn test_missing_numeric_attribute_passes_range() {
        let records = vec![
            case("priced", "Corsair", Some(500.0), &[]),
            case("unpriced", "Corsair", None, &[]),
        ];
        let criteria = FilterCriteria::new().with_range("price", Some(0.0), Some(100.0));
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["unpriced"]);
    }

    #[test]
    fn test_missing_categorical_attribute_passes_selection() {
        let records = vec![
            case("black", "Corsair", Some(50.0), &["Black"]),
            case("no-color", "Corsair", Some(50.0), &[]),
        ];
        let criteria = FilterCriteria::new().with_selection("color", ["White"]);
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["no-color"]);
    }

    #[test]
    fn test_unknown_field_never_excludes() {
        let records = six_cases();
        let criteria = FilterCriteria::new()
            .with_range("wattage", Some(1000.0), None)
            .with_selection("socket", ["AM5"])
            .with_flag("wifi", Some(true));
        assert_eq!(CatalogFilter::new(&criteria).apply(&records).len(), 6);
    }

    #[test]
    fn test_flag_must_match_exactly_when_set() {
        let records = vec![
            memory("m1", "Trident Z5 RGB", Some(6000.0), Some(true)),
            memory("m2", "Ripjaws S5", Some(5600.0), Some(false)),
            memory("m3", "Aegis", Some(3200.0), None),
        ];
        let criteria = FilterCriteria::new().with_flag("rgb", Some(false));
        assert_eq!(
            ids(&CatalogFilter::new(&criteria).apply(&records)),
            vec!["m2", "m3"]
        );
    }

    #[test]
    fn test_four_memory_modules_with_empty_criteria() {
        let records = vec![
            memory("m1", "A", Some(6000.0), None),
            memory("m2", "B", Some(5600.0), None),
            memory("m3", "C", Some(3200.0), None),
            memory("m4", "D", Some(3600.0), None),
        ];
        let criteria = FilterCriteria::new().with_search("");
        let result = CatalogFilter::new(&criteria).apply(&records);
        assert_eq!(ids(&result), vec!["m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_ranges_and_search_combine_with_and() {
        let records = vec![
            memory("m1", "Trident Z5", Some(6000.0), None),
            memory("m2", "Trident Z Neo", Some(3600.0), None),
            memory("m3", "Ripjaws", Some(6000.0), None),
        ];
        let criteria = FilterCriteria::new()
            .with_search("trident")
            .with_range("speed_mhz", Some(5000.0), None);
        assert_eq!(ids(&CatalogFilter::new(&criteria).apply(&records)), vec!["m1"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = six_cases();
        let criteria = FilterCriteria::new()
            .with_range("price", Some(60.0), Some(120.0))
            .with_selection("color", ["Black"]);
        let filter = CatalogFilter::new(&criteria);
        let once = filter.filter_records(records);
        let twice = filter.filter_records(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inverted_range_excludes_records_with_the_attribute() {
        let records = six_cases();
        let criteria = FilterCriteria::new().with_range("price", Some(200.0), Some(10.0));
        assert!(CatalogFilter::new(&criteria).apply(&records).is_empty());
    }
}
