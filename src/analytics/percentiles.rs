//! Nearest-rank percentile aggregation across well production series.
//!
//! The rank formula is `index = ceil(((100 - P) / 100) * n) - 1` over an
//! ascending sort, which follows the oil-industry descending-percentile
//! convention: P90 is the value 90% of wells exceed (a low value), P10 the
//! optimistic case. The formula's exact rounding is load-bearing — outputs
//! must match the original charts bit for bit, so no substitution with an
//! interpolating percentile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::ProductionSeries;

/// Aggregated percentile series plus the raw per-well series.
///
/// `months` is ascending; `p10`/`p50`/`p90` are aligned to it. Months with no
/// contributing wells are omitted entirely, never emitted as zeros. The raw
/// series ride along for background plotting (thin, translucent) behind the
/// bold percentile lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PercentileChart {
    pub months: Vec<u32>,
    pub p10: Vec<f64>,
    pub p50: Vec<f64>,
    pub p90: Vec<f64>,
    pub wells: ProductionSeries,
}

impl PercentileChart {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Nearest-rank index for percentile `p` into an ascending list of length `n`.
///
/// Clamped to the valid range; returns 0 for an empty list (callers check
/// emptiness first).
pub fn percentile_index(p: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let idx = (((100.0 - p) / 100.0) * n as f64).ceil() as i64 - 1;
    usize::try_from(idx.clamp(0, n as i64 - 1)).unwrap_or(0)
}

/// Nearest-rank percentile of an ascending-sorted slice.
pub fn nearest_rank(sorted_asc: &[f64], p: f64) -> Option<f64> {
    if sorted_asc.is_empty() {
        return None;
    }
    Some(sorted_asc[percentile_index(p, sorted_asc.len())])
}

/// Aggregate P10/P50/P90 series across all wells' monthly oil values.
pub fn aggregate_percentiles(series: &ProductionSeries) -> PercentileChart {
    // Group oil values by month offset across the whole well set.
    let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for points in series.values() {
        for point in points {
            by_month.entry(point.month).or_default().push(point.oil);
        }
    }

    let mut chart = PercentileChart {
        wells: series.clone(),
        ..PercentileChart::default()
    };

    for (month, mut values) in by_month {
        values.sort_by(f64::total_cmp);

        // Non-empty by construction: a month only exists here because at
        // least one well contributed a value.
        let n = values.len();
        chart.months.push(month);
        chart.p10.push(values[percentile_index(10.0, n)]);
        chart.p50.push(values[percentile_index(50.0, n)]);
        chart.p90.push(values[percentile_index(90.0, n)]);
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MonthlyOil;

    fn series_of(wells: &[(&str, &[(u32, f64)])]) -> ProductionSeries {
        wells
            .iter()
            .map(|(api, points)| {
                (
                    (*api).to_string(),
                    points
                        .iter()
                        .map(|&(month, oil)| MonthlyOil { month, oil })
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_nearest_rank_formula_exactly() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];

        // ceil(((100-50)/100)*5)-1 = 2
        assert_eq!(nearest_rank(&values, 50.0), Some(30.0));
        // ceil(0.1*5)-1 = 0
        assert_eq!(nearest_rank(&values, 90.0), Some(10.0));
        // ceil(0.9*5)-1 = 4
        assert_eq!(nearest_rank(&values, 10.0), Some(50.0));
    }

    #[test]
    fn test_nearest_rank_single_value() {
        assert_eq!(nearest_rank(&[7.5], 10.0), Some(7.5));
        assert_eq!(nearest_rank(&[7.5], 90.0), Some(7.5));
    }

    #[test]
    fn test_nearest_rank_empty() {
        assert_eq!(nearest_rank(&[], 50.0), None);
    }

    #[test]
    fn test_aggregate_groups_by_month() {
        let series = series_of(&[
            ("A", &[(1, 100.0), (2, 80.0)]),
            ("B", &[(1, 200.0), (2, 160.0)]),
            ("C", &[(1, 300.0)]),
        ]);

        let chart = aggregate_percentiles(&series);

        assert_eq!(chart.months, vec![1, 2]);
        // Month 1: [100, 200, 300] → P90 idx 0, P50 idx 1, P10 idx 2
        assert_eq!(chart.p90[0], 100.0);
        assert_eq!(chart.p50[0], 200.0);
        assert_eq!(chart.p10[0], 300.0);
        // Month 2: only A and B contribute, sorted [80, 160].
        // P50 = index ceil(0.5*2)-1 = 0 → 80; P10 = index ceil(0.9*2)-1 = 1.
        assert_eq!(chart.p90[1], 80.0);
        assert_eq!(chart.p50[1], 80.0);
        assert_eq!(chart.p10[1], 160.0);
    }

    #[test]
    fn test_months_without_contributors_are_omitted() {
        let series = series_of(&[("A", &[(1, 100.0), (3, 60.0)])]);
        let chart = aggregate_percentiles(&series);
        assert_eq!(chart.months, vec![1, 3]);
    }

    #[test]
    fn test_empty_series_yields_empty_chart() {
        let chart = aggregate_percentiles(&ProductionSeries::new());
        assert!(chart.is_empty());
        assert!(chart.wells.is_empty());
    }

    #[test]
    fn test_raw_series_preserved_for_background_plots() {
        let series = series_of(&[("A", &[(1, 100.0)])]);
        let chart = aggregate_percentiles(&series);
        assert_eq!(chart.wells["A"][0].oil, 100.0);
    }
}
