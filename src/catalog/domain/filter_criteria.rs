use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Inclusive numeric range; a `None` bound leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// A user's filter selection for one category page.
///
/// Every facet starts unconstrained. Empty search, an open range, an empty
/// selection set and an unset flag all match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    search: String,
    ranges: BTreeMap<String, NumericRange>,
    selections: BTreeMap<String, BTreeSet<String>>,
    flags: BTreeMap<String, bool>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    pub fn with_range(mut self, field: &str, min: Option<f64>, max: Option<f64>) -> Self {
        self.set_range(field, min, max);
        self
    }

    pub fn with_selection<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selection(field, values);
        self
    }

    pub fn with_flag(mut self, field: &str, value: Option<bool>) -> Self {
        self.set_flag(field, value);
        self
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Sets (or, with both bounds open, removes) the range for `field`.
    /// Non-finite bounds are treated as open.
    pub fn set_range(&mut self, field: &str, min: Option<f64>, max: Option<f64>) {
        let finite = |bound: Option<f64>| bound.filter(|b| b.is_finite());
        let range = NumericRange::new(finite(min), finite(max));
        if range.is_active() {
            self.ranges.insert(field.to_string(), range);
        } else {
            self.ranges.remove(field);
        }
    }

    /// Replaces the selected set for `field`
    pub fn set_selection<I, S>(&mut self, field: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            self.selections.remove(field);
        } else {
            self.selections.insert(field.to_string(), set);
        }
    }

    /// Adds `value` to the selected set for `field`
    pub fn select(&mut self, field: &str, value: impl Into<String>) {
        self.selections
            .entry(field.to_string())
            .or_default()
            .insert(value.into());
    }

    /// Checkbox semantics: selects `value` if absent, deselects it otherwise
    pub fn toggle(&mut self, field: &str, value: &str) {
        let set = self.selections.entry(field.to_string()).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.selections.remove(field);
        }
    }

    /// Tri-state flag; `None` clears it
    pub fn set_flag(&mut self, field: &str, value: Option<bool>) {
        match value {
            Some(v) => {
                self.flags.insert(field.to_string(), v);
            }
            None => {
                self.flags.remove(field);
            }
        }
    }

    /// Back to all-unconstrained defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed search query, `None` when inactive
    pub fn search_query(&self) -> Option<&str> {
        let query = self.search.trim();
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }

    pub fn ranges(&self) -> impl Iterator<Item = (&str, &NumericRange)> {
        self.ranges
            .iter()
            .filter(|(_, r)| r.is_active())
            .map(|(field, r)| (field.as_str(), r))
    }

    pub fn selections(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.selections
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(field, set)| (field.as_str(), set))
    }

    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(field, v)| (field.as_str(), *v))
    }

    pub fn range(&self, field: &str) -> Option<&NumericRange> {
        self.ranges.get(field)
    }

    pub fn selection(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.selections.get(field)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.flags.get(field).copied()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search_query().is_none()
            && self.ranges().next().is_none()
            && self.selections().next().is_none()
            && self.flags.is_empty()
    }

    /// Field names referenced by any active facet
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        self.ranges()
            .map(|(f, _)| f)
            .chain(self.selections().map(|(f, _)| f))
            .chain(self.flags().map(|(f, _)| f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let criteria = FilterCriteria::new().with_search("   ");
        assert!(criteria.search_query().is_none());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_open_range_is_removed() {
        let mut criteria = FilterCriteria::new().with_range("price", None, Some(100.0));
        assert!(!criteria.is_unconstrained());
        criteria.set_range("price", None, None);
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_non_finite_bounds_are_open() {
        let criteria = FilterCriteria::new()
            .with_range("price", Some(f64::NAN), None)
            .with_range("length_mm", Some(200.0), Some(f64::INFINITY));
        assert!(criteria.ranges().all(|(field, _)| field != "price"));

        let (_, length) = criteria.ranges().find(|(f, _)| *f == "length_mm").unwrap();
        assert_eq!(*length, NumericRange::new(Some(200.0), None));
        assert!(length.contains(336.0));
    }

    #[test]
    fn test_numeric_range_contains_is_inclusive() {
        let range = NumericRange::new(Some(10.0), Some(20.0));
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(NumericRange::new(None, Some(5.0)).contains(-3.0));
    }

    #[test]
    fn test_toggle_selection() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle("brand", "Corsair");
        assert!(criteria.selection("brand").unwrap().contains("Corsair"));
        criteria.toggle("brand", "Corsair");
        assert!(criteria.selection("brand").is_none());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_empty_selection_is_unconstrained() {
        let criteria = FilterCriteria::new().with_selection("brand", Vec::<String>::new());
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_flag_none_clears() {
        let mut criteria = FilterCriteria::new().with_flag("rgb", Some(false));
        assert_eq!(criteria.flag("rgb"), Some(false));
        criteria.set_flag("rgb", None);
        assert_eq!(criteria.flag("rgb"), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = FilterCriteria::new()
            .with_search("ryzen")
            .with_range("price", Some(1.0), None)
            .with_selection("brand", ["AMD"])
            .with_flag("smt", Some(true));
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_referenced_fields() {
        let criteria = FilterCriteria::new()
            .with_range("price", Some(1.0), None)
            .with_selection("socket", ["AM5"])
            .with_flag("smt", Some(true));
        let fields: Vec<_> = criteria.referenced_fields().collect();
        assert_eq!(fields, vec!["price", "socket", "smt"]);
    }
}
