//! Filter criteria and pure well-set derivations.
//!
//! All derivations here are pure functions of (wells, criteria): idempotent,
//! side-effect free, and safe to re-run on every dependency change. The
//! store re-invokes them after each mutation instead of caching.

use std::collections::BTreeSet;

use crate::types::{WellCollection, WellProperties};

/// User-tunable filter criteria over the current well set.
///
/// Empty operator/formation selections mean "no constraint" — pass-through,
/// not "match nothing". The lateral range is inclusive on both ends; the UI
/// keeps min ≤ max but nothing here enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub operators: BTreeSet<String>,
    pub formations: BTreeSet<String>,
    pub lateral_min_ft: f64,
    pub lateral_max_ft: f64,
}

impl FilterCriteria {
    /// Unconstrained criteria with the given lateral slider bounds.
    pub fn new(lateral_min_ft: f64, lateral_max_ft: f64) -> Self {
        Self {
            operators: BTreeSet::new(),
            formations: BTreeSet::new(),
            lateral_min_ft,
            lateral_max_ft,
        }
    }

    /// Whether a single well passes all three criteria.
    ///
    /// A missing lateral length reads as 0 ft, matching the upstream data's
    /// falsy coercion.
    pub fn matches(&self, props: &WellProperties) -> bool {
        let operator_ok = self.operators.is_empty()
            || props
                .operator()
                .is_some_and(|op| self.operators.contains(op));

        let formation_ok = self.formations.is_empty()
            || props
                .formation()
                .is_some_and(|fm| self.formations.contains(fm));

        let lateral = props.lateral_ft();
        let lateral_ok = lateral >= self.lateral_min_ft && lateral <= self.lateral_max_ft;

        operator_ok && formation_ok && lateral_ok
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(0.0, 20_000.0)
    }
}

/// The subset of `wells` satisfying `criteria`.
pub fn filtered_wells(wells: &WellCollection, criteria: &FilterCriteria) -> WellCollection {
    WellCollection {
        features: wells
            .features
            .iter()
            .filter(|f| criteria.matches(&f.properties))
            .cloned()
            .collect(),
    }
}

/// Distinct non-empty operator names, case-insensitively sorted.
pub fn available_operators(wells: &WellCollection) -> Vec<String> {
    distinct_sorted(wells, WellProperties::operator)
}

/// Distinct non-empty formation names, case-insensitively sorted.
pub fn available_formations(wells: &WellCollection) -> Vec<String> {
    distinct_sorted(wells, WellProperties::formation)
}

fn distinct_sorted(
    wells: &WellCollection,
    extract: impl Fn(&WellProperties) -> Option<&str>,
) -> Vec<String> {
    let mut names: Vec<String> = wells
        .features
        .iter()
        .filter_map(|f| extract(&f.properties))
        .map(str::to_string)
        .collect();

    // Case-insensitive order with a stable tie-break so "alpha" sorts
    // before "Beta" while distinct casings keep a deterministic order.
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Feature;

    fn well(operator: Option<&str>, interval: Option<&str>, lateral: Option<f64>) -> Feature<WellProperties> {
        Feature {
            geometry: None,
            properties: WellProperties {
                well_id: None,
                api_14: Some("05123000000000".to_string()),
                well_name: None,
                env_operator: operator.map(str::to_string),
                interval: interval.map(str::to_string),
                spud_date: None,
                lateral_length: lateral,
            },
        }
    }

    fn collection(features: Vec<Feature<WellProperties>>) -> WellCollection {
        WellCollection { features }
    }

    #[test]
    fn test_empty_criteria_passes_everything_through() {
        let wells = collection(vec![
            well(Some("Alpha"), Some("Niobrara"), Some(8000.0)),
            well(Some("Beta"), Some("Codell"), Some(4500.0)),
        ]);
        let criteria = FilterCriteria::default();

        assert_eq!(filtered_wells(&wells, &criteria), wells);
    }

    #[test]
    fn test_operator_filter() {
        let wells = collection(vec![
            well(Some("Alpha"), None, Some(8000.0)),
            well(Some("Beta"), None, Some(4500.0)),
        ]);
        let mut criteria = FilterCriteria::default();
        criteria.operators.insert("Alpha".to_string());

        let filtered = filtered_wells(&wells, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.features[0].properties.operator(), Some("Alpha"));
    }

    #[test]
    fn test_lateral_range_is_inclusive() {
        let wells = collection(vec![
            well(None, None, Some(5000.0)),
            well(None, None, Some(9000.0)),
            well(None, None, Some(9000.1)),
        ]);
        let criteria = FilterCriteria::new(5000.0, 9000.0);

        assert_eq!(filtered_wells(&wells, &criteria).len(), 2);
    }

    #[test]
    fn test_missing_lateral_reads_as_zero() {
        let wells = collection(vec![well(None, None, None)]);

        assert_eq!(filtered_wells(&wells, &FilterCriteria::new(0.0, 100.0)).len(), 1);
        assert_eq!(filtered_wells(&wells, &FilterCriteria::new(1.0, 100.0)).len(), 0);
    }

    #[test]
    fn test_filtering_is_idempotent_and_subset() {
        let wells = collection(vec![
            well(Some("Alpha"), Some("Niobrara"), Some(8000.0)),
            well(Some("Beta"), Some("Codell"), Some(4500.0)),
            well(None, Some("Codell"), Some(6200.0)),
        ]);
        let mut criteria = FilterCriteria::new(4000.0, 9000.0);
        criteria.formations.insert("Codell".to_string());

        let once = filtered_wells(&wells, &criteria);
        let twice = filtered_wells(&once, &criteria);

        assert_eq!(once, twice);
        assert!(once.len() <= wells.len());
        for f in &once.features {
            assert!(wells.features.contains(f));
        }
    }

    #[test]
    fn test_available_operators_dedup_and_case_insensitive_sort() {
        let wells = collection(vec![
            well(Some("Beta"), None, None),
            well(Some("alpha"), None, None),
            well(Some("Beta"), None, None),
            well(Some(""), None, None),
            well(None, None, None),
        ]);

        assert_eq!(available_operators(&wells), vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_available_formations_excludes_missing() {
        let wells = collection(vec![
            well(None, Some("Niobrara"), None),
            well(None, None, None),
            well(None, Some("Codell"), None),
        ]);

        assert_eq!(available_formations(&wells), vec!["Codell", "Niobrara"]);
    }
}
