//! Production wire types
//!
//! Response shapes for the two production endpoints: the single-well monthly
//! time series (detail popup) and the batch aggregate used for percentile
//! charts. The aggregate reply carries an application-level `success` flag
//! that must be checked independently of the HTTP status.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of oil production, normalized to months since first production.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOil {
    /// 1-based month offset from the well's first production date.
    pub month: u32,
    /// Oil volume for the month, bbl.
    pub oil: f64,
}

/// One calendar month of a single well's production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub prod_date: NaiveDate,
    pub oil: f64,
    pub gas: f64,
}

/// `GET /wells/{api}/production` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellProductionResponse {
    pub api_14: String,
    #[serde(default)]
    pub well_name: Option<String>,
    pub production: Vec<ProductionRecord>,
    #[serde(default)]
    pub record_count: usize,
}

/// `POST /wells/aggregate-production` response envelope.
///
/// `success: false` on a 2xx reply is still a failure; the backend client
/// raises it on the same error path as a non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateProductionResponse {
    pub success: bool,
    #[serde(default)]
    pub data: ProductionSeries,
    #[serde(default)]
    pub well_count: usize,
}

/// Per-well monthly oil series keyed by API-14 identifier.
pub type ProductionSeries = HashMap<String, Vec<MonthlyOil>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_envelope_decode() {
        let raw = r#"{
            "success": true,
            "data": {
                "05123111220000": [{"month": 1, "oil": 5200.0}, {"month": 2, "oil": 4100.5}]
            },
            "well_count": 1
        }"#;
        let resp: AggregateProductionResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.well_count, 1);
        assert_eq!(resp.data["05123111220000"][1].oil, 4100.5);
    }

    #[test]
    fn test_failure_envelope_decodes_without_data() {
        let raw = r#"{"success": false}"#;
        let resp: AggregateProductionResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_production_record_date_parses() {
        let raw = r#"{"prod_date": "2019-04-01", "oil": 1234.56, "gas": 890.12}"#;
        let rec: ProductionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.prod_date, NaiveDate::from_ymd_opt(2019, 4, 1).unwrap());
    }
}
