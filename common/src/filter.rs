//! Filter engine: stable, AND-combined narrowing of a flat collection.
//!
//! Exact-match fields compare case-sensitively against the value the record
//! exposes for that field. Search fields (e.g. the examinee box) match when
//! any of the record's search targets contains the needle, ignoring case.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A record that can be narrowed by [`filter`].
pub trait Filterable {
    type Field: Copy + Ord + fmt::Debug + 'static;

    /// Exact-match fields that get an option list in the filter controls.
    const FACETS: &'static [Self::Field];

    /// The value of an exact-match field, or `None` when `field` is a
    /// free-text search field.
    fn field_value(&self, field: Self::Field) -> Option<&str>;

    /// Haystacks searched when `field` is a free-text search field.
    fn search_targets(&self, _field: Self::Field) -> Vec<&str> {
        Vec::new()
    }

    fn matches(&self, field: Self::Field, value: &str) -> bool {
        match self.field_value(field) {
            Some(own) => own == value,
            None => self
                .search_targets(field)
                .into_iter()
                .any(|target| contains_ignore_case(target, value)),
        }
    }
}

/// Current field -> value constraints of a screen. An empty value means the
/// field is unconstrained, so it is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria<F: Ord> {
    values: BTreeMap<F, String>,
}

impl<F: Ord> Default for Criteria<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F: Copy + Ord> Criteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`; an empty value removes the constraint.
    /// Returns whether the criteria changed.
    pub fn set(&mut self, field: F, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return self.values.remove(&field).is_some();
        }
        match self.values.insert(field, value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The constraint on `field`, or `""` when unconstrained.
    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Returns the records of `collection` satisfying every criterion, in their
/// original order.
pub fn filter<'a, T: Filterable>(collection: &'a [T], criteria: &Criteria<T::Field>) -> Vec<&'a T> {
    collection
        .iter()
        .filter(|record| {
            criteria
                .iter()
                .all(|(field, value)| record.matches(field, value))
        })
        .collect()
}

/// Distinct values of `field` across `collection`, sorted ascending.
///
/// Callers pass the full, unfiltered collection so option lists stay stable
/// while the user narrows the result set.
pub fn option_values<T: Filterable>(collection: &[T], field: T::Field) -> Vec<String> {
    collection
        .iter()
        .filter_map(|record| record.field_value(field))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        colour: &'static str,
        size: &'static str,
        name: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum RowField {
        Colour,
        Size,
        Name,
    }

    impl Filterable for Row {
        type Field = RowField;
        const FACETS: &'static [RowField] = &[RowField::Colour, RowField::Size];

        fn field_value(&self, field: RowField) -> Option<&str> {
            match field {
                RowField::Colour => Some(self.colour),
                RowField::Size => Some(self.size),
                RowField::Name => None,
            }
        }

        fn search_targets(&self, field: RowField) -> Vec<&str> {
            match field {
                RowField::Name => vec![self.name],
                _ => Vec::new(),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, colour: "red", size: "L", name: "Alpha" },
            Row { id: 2, colour: "blue", size: "S", name: "beta" },
            Row { id: 3, colour: "red", size: "S", name: "Gamma" },
            Row { id: 4, colour: "Red", size: "L", name: "alphabet" },
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let data = rows();
        let out = filter(&data, &Criteria::new());
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn exact_fields_are_case_sensitive() {
        let data = rows();
        let out = filter(&data, &Criteria::new().with(RowField::Colour, "red"));
        assert_eq!(ids(&out), vec![1, 3]);
    }

    #[test]
    fn search_fields_ignore_case_and_match_substrings() {
        let data = rows();
        let out = filter(&data, &Criteria::new().with(RowField::Name, "ALPHA"));
        assert_eq!(ids(&out), vec![1, 4]);
    }

    #[test]
    fn criteria_combine_with_and_and_preserve_order() {
        let data = rows();
        let criteria = Criteria::new()
            .with(RowField::Colour, "red")
            .with(RowField::Size, "S");
        assert_eq!(ids(&filter(&data, &criteria)), vec![3]);
    }

    #[test]
    fn composing_disjoint_filters_equals_union() {
        let data = rows();
        let k1 = Criteria::new().with(RowField::Size, "L");
        let k2 = Criteria::new().with(RowField::Name, "alp");
        let union = Criteria::new()
            .with(RowField::Size, "L")
            .with(RowField::Name, "alp");

        let first: Vec<Row> = filter(&data, &k1).into_iter().cloned().collect();
        let composed = filter(&first, &k2);
        assert_eq!(ids(&composed), ids(&filter(&data, &union)));
    }

    #[test]
    fn setting_empty_value_removes_constraint() {
        let mut criteria = Criteria::new().with(RowField::Colour, "red");
        assert!(criteria.set(RowField::Colour, ""));
        assert!(criteria.is_empty());
        assert!(!criteria.set(RowField::Colour, ""));
        assert_eq!(criteria.get(RowField::Colour), "");
    }

    #[test]
    fn set_reports_unchanged_value() {
        let mut criteria = Criteria::new();
        assert!(criteria.set(RowField::Size, "L"));
        assert!(!criteria.set(RowField::Size, "L"));
        assert!(criteria.set(RowField::Size, "S"));
    }

    #[test]
    fn option_values_are_unique_and_sorted() {
        let data = rows();
        assert_eq!(option_values(&data, RowField::Colour), vec!["Red", "blue", "red"]);
        assert_eq!(option_values(&data, RowField::Size), vec!["L", "S"]);
        assert!(option_values(&data, RowField::Name).is_empty());
    }
}
