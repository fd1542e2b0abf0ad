//! Well and TR feature properties
//!
//! Property shapes for the two feature collections the backend serves:
//! township/range polygons and well points/laterals. Field names follow the
//! backend's column names (`api_14`, `env_operator`, `interval`) so the wire
//! format decodes without rename plumbing.

use serde::{Deserialize, Serialize};

use super::geojson::FeatureCollection;

/// Properties attached to a township/range polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrProperties {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub basin: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// TR identifier string, e.g. "3N65W". The selection key.
    pub tr: String,
}

/// Properties attached to a well feature.
///
/// Everything is optional: the upstream dataset has gaps, and a missing
/// operator or interval simply drops the well from the categorical option
/// lists rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellProperties {
    #[serde(default)]
    pub well_id: Option<i64>,
    #[serde(default)]
    pub api_14: Option<String>,
    #[serde(default)]
    pub well_name: Option<String>,
    /// Operating company name; drives the categorical color layer.
    #[serde(default)]
    pub env_operator: Option<String>,
    /// Producing formation / interval name.
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub spud_date: Option<String>,
    /// Horizontal drilled length in feet.
    #[serde(default)]
    pub lateral_length: Option<f64>,
}

impl WellProperties {
    /// Operator name if present and non-empty.
    pub fn operator(&self) -> Option<&str> {
        self.env_operator.as_deref().filter(|s| !s.is_empty())
    }

    /// Formation/interval name if present and non-empty.
    pub fn formation(&self) -> Option<&str> {
        self.interval.as_deref().filter(|s| !s.is_empty())
    }

    /// Lateral length with the upstream's falsy coercion: missing reads as 0.
    pub fn lateral_ft(&self) -> f64 {
        self.lateral_length.unwrap_or(0.0)
    }
}

/// The TR polygon layer, fetched once at startup.
pub type TrCollection = FeatureCollection<TrProperties>;

/// The well layer, refetched per TR + radius query.
pub type WellCollection = FeatureCollection<WellProperties>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_properties_decode_with_gaps() {
        let raw = r#"{"api_14": "05123111220000", "env_operator": "", "lateral_length": null}"#;
        let props: WellProperties = serde_json::from_str(raw).unwrap();
        assert_eq!(props.api_14.as_deref(), Some("05123111220000"));
        assert!(props.operator().is_none(), "empty operator is filtered out");
        assert!(props.formation().is_none());
        assert_eq!(props.lateral_ft(), 0.0);
    }

    #[test]
    fn test_tr_properties_decode() {
        let raw = r#"{"id": 7, "basin": "DJ", "state": "CO", "tr": "3N65W"}"#;
        let props: TrProperties = serde_json::from_str(raw).unwrap();
        assert_eq!(props.tr, "3N65W");
        assert_eq!(props.basin.as_deref(), Some("DJ"));
    }
}
