//! Grouping engine: a two-level label tree (e.g. area -> program) used to
//! drive the tree dropdown and the grouped view.
//!
//! Outer and inner labels are both sorted ascending, so the same collection
//! always yields the same tree regardless of row order.

use std::collections::{BTreeMap, BTreeSet};

use crate::filter::{Criteria, Filterable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }
}

/// Groups `collection` by `outer`, collecting the distinct `inner` values of
/// each group. Records without a value for either field are skipped.
pub fn build_tree<T: Filterable>(collection: &[T], outer: T::Field, inner: T::Field) -> Vec<TreeNode> {
    let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in collection {
        if let (Some(o), Some(i)) = (record.field_value(outer), record.field_value(inner)) {
            groups.entry(o).or_default().insert(i);
        }
    }

    groups
        .into_iter()
        .map(|(label, children)| TreeNode {
            label: label.to_string(),
            children: children
                .into_iter()
                .map(|child| TreeNode::leaf(child.to_string()))
                .collect(),
        })
        .collect()
}

/// A tree node with the number of records under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
    pub children: Vec<GroupCount>,
}

/// [`build_tree`] with per-node record counts, for the grouped view.
pub fn count_groups<T: Filterable>(collection: &[T], outer: T::Field, inner: T::Field) -> Vec<GroupCount> {
    build_tree(collection, outer, inner)
        .into_iter()
        .map(|node| {
            let members: Vec<&T> = collection
                .iter()
                .filter(|record| record.field_value(outer) == Some(node.label.as_str()))
                .collect();
            let children = node
                .children
                .into_iter()
                .map(|child| GroupCount {
                    count: members
                        .iter()
                        .filter(|record| record.field_value(inner) == Some(child.label.as_str()))
                        .count(),
                    label: child.label,
                    children: Vec::new(),
                })
                .collect();
            GroupCount {
                label: node.label,
                count: members.len(),
                children,
            }
        })
        .collect()
}

/// A pick in the tree dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSelection {
    All,
    Outer(String),
    Inner { outer: String, inner: String },
}

impl TreeSelection {
    /// Writes the selection into the two criteria the tree stands for.
    /// Returns whether the criteria changed.
    pub fn apply<F: Copy + Ord>(&self, criteria: &mut Criteria<F>, outer: F, inner: F) -> bool {
        let (o, i) = match self {
            TreeSelection::All => ("", ""),
            TreeSelection::Outer(o) => (o.as_str(), ""),
            TreeSelection::Inner { outer, inner } => (outer.as_str(), inner.as_str()),
        };
        let outer_changed = criteria.set(outer, o);
        let inner_changed = criteria.set(inner, i);
        outer_changed || inner_changed
    }

    /// Reads the current selection back out of the criteria.
    pub fn from_criteria<F: Copy + Ord>(criteria: &Criteria<F>, outer: F, inner: F) -> Self {
        match (criteria.get(outer), criteria.get(inner)) {
            ("", "") => TreeSelection::All,
            (o, "") => TreeSelection::Outer(o.to_string()),
            (o, i) => TreeSelection::Inner {
                outer: o.to_string(),
                inner: i.to_string(),
            },
        }
    }

    /// Text shown in the closed dropdown; empty for `All`.
    pub fn label(&self) -> &str {
        match self {
            TreeSelection::All => "",
            TreeSelection::Outer(o) => o.as_str(),
            TreeSelection::Inner { inner, .. } => inner.as_str(),
        }
    }
}
