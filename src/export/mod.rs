//! CSV export of percentile production series.
//!
//! Fixed 4-column layout (`Month,P90,P50,P10`), one row per month present in
//! the chart, filename stamped with the current UTC date.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::analytics::PercentileChart;

/// Export errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Render the chart's percentile series as CSV text.
pub fn percentile_csv(chart: &PercentileChart) -> String {
    let mut out = String::from("Month,P90,P50,P10\n");
    for (i, month) in chart.months.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            month, chart.p90[i], chart.p50[i], chart.p10[i]
        ));
    }
    out
}

/// Date-stamped export filename, e.g. `production_percentiles_2026-08-30.csv`.
pub fn export_filename() -> String {
    format!("production_percentiles_{}.csv", Utc::now().format("%Y-%m-%d"))
}

/// Write the percentile CSV into `dir` and return the written path.
pub fn write_percentile_csv(chart: &PercentileChart, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_filename());
    std::fs::write(&path, percentile_csv(chart)).map_err(|e| ExportError::Io(path.clone(), e))?;
    info!(path = %path.display(), months = chart.months.len(), "Percentile CSV written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> PercentileChart {
        PercentileChart {
            months: vec![1, 2],
            p10: vec![300.0, 240.0],
            p50: vec![200.0, 160.0],
            p90: vec![100.0, 80.0],
            wells: Default::default(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = percentile_csv(&chart());
        assert_eq!(csv, "Month,P90,P50,P10\n1,100,200,300\n2,80,160,240\n");
    }

    #[test]
    fn test_empty_chart_is_header_only() {
        let csv = percentile_csv(&PercentileChart::default());
        assert_eq!(csv, "Month,P90,P50,P10\n");
    }

    #[test]
    fn test_filename_is_date_stamped() {
        let name = export_filename();
        assert!(name.starts_with("production_percentiles_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_percentile_csv(&chart(), dir.path()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Month,P90,P50,P10"));
    }
}
