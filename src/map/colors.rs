//! Operator color assignment.
//!
//! Operators are colored by first-seen order through a fixed 20-color
//! palette. Beyond 20 distinct operators the palette wraps — an accepted
//! collision. Colors are stable within one wells dataset but reassigned on
//! each new TR fetch, since the first-seen order can change.

use std::collections::HashMap;

/// Fixed categorical palette, 20 hex colors.
pub const OPERATOR_PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728",
    "#ff9896", "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2",
    "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Fallback for features whose operator is missing from the assignment.
pub const FALLBACK_COLOR: &str = "#888888";

/// Operator → hex color assignment in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorColorMap {
    /// First-seen ordering, preserved for the paint expression cases.
    ordered: Vec<(String, String)>,
    by_operator: HashMap<String, String>,
}

impl OperatorColorMap {
    /// Color for an operator, if assigned.
    pub fn color(&self, operator: &str) -> Option<&str> {
        self.by_operator.get(operator).map(String::as_str)
    }

    /// (operator, color) pairs in first-seen order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Assign `OPERATOR_PALETTE[i % 20]` to each distinct operator.
///
/// `operators` must already be in first-seen order; duplicates are ignored
/// after their first occurrence.
pub fn assign_operator_colors<I, S>(operators: I) -> OperatorColorMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = OperatorColorMap::default();

    for op in operators {
        let op = op.as_ref();
        if op.is_empty() || map.by_operator.contains_key(op) {
            continue;
        }
        let color = OPERATOR_PALETTE[map.ordered.len() % OPERATOR_PALETTE.len()];
        map.ordered.push((op.to_string(), color.to_string()));
        map.by_operator.insert(op.to_string(), color.to_string());
    }

    map
}
