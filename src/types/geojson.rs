//! GeoJSON wire types
//!
//! Minimal feature-collection types matching what the backend emits from
//! PostGIS (`ST_AsGeoJSON`). Only the geometry kinds the backend actually
//! produces are modeled; an unknown `type` tag is a decode error, not a
//! silently-coerced value.

use serde::{Deserialize, Serialize};

/// A GeoJSON position. The backend always emits lon/lat pairs.
pub type Position = [f64; 2];

/// GeoJSON geometry, tagged on the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

impl Geometry {
    /// First ring of the first polygon, for Polygon and MultiPolygon shapes.
    ///
    /// Returns `None` for point/line geometries and for polygons with no
    /// rings — callers treat that as "nowhere to fly to".
    pub fn first_ring(&self) -> Option<&[Position]> {
        match self {
            Self::Polygon { coordinates } => coordinates.first().map(Vec::as_slice),
            Self::MultiPolygon { coordinates } => coordinates
                .first()
                .and_then(|poly| poly.first())
                .map(Vec::as_slice),
            _ => None,
        }
    }
}

/// A GeoJSON feature with typed properties.
///
/// The `type` tag is checked by hand on decode: serde's struct-level tag
/// attribute only emits the tag on serialize, it does not validate it, so a
/// wrong-shaped envelope would otherwise slip through.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<P> {
    pub geometry: Option<Geometry>,
    pub properties: P,
}

#[derive(Deserialize)]
struct RawFeature<P> {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    geometry: Option<Geometry>,
    properties: P,
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for Feature<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFeature::<P>::deserialize(deserializer)?;
        if raw.tag != "Feature" {
            return Err(serde::de::Error::custom(format!(
                "expected type \"Feature\", got \"{}\"",
                raw.tag
            )));
        }
        Ok(Self {
            geometry: raw.geometry,
            properties: raw.properties,
        })
    }
}

impl<P: Serialize> Serialize for Feature<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Feature", 3)?;
        s.serialize_field("type", "Feature")?;
        s.serialize_field("geometry", &self.geometry)?;
        s.serialize_field("properties", &self.properties)?;
        s.end()
    }
}

/// A GeoJSON feature collection with typed properties.
///
/// The `type` tag is enforced on decode: a payload whose `type` is not
/// `FeatureCollection` is an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

#[derive(Deserialize)]
struct RawFeatureCollection<P> {
    #[serde(rename = "type")]
    tag: String,
    features: Vec<Feature<P>>,
}

impl<'de, P: Deserialize<'de>> Deserialize<'de> for FeatureCollection<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFeatureCollection::<P>::deserialize(deserializer)?;
        if raw.tag != "FeatureCollection" {
            return Err(serde::de::Error::custom(format!(
                "expected type \"FeatureCollection\", got \"{}\"",
                raw.tag
            )));
        }
        Ok(Self {
            features: raw.features,
        })
    }
}

impl<P: Serialize> Serialize for FeatureCollection<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("FeatureCollection", 2)?;
        s.serialize_field("type", "FeatureCollection")?;
        s.serialize_field("features", &self.features)?;
        s.end()
    }
}

impl<P> FeatureCollection<P> {
    /// An empty collection, used as the reset value after failed fetches.
    pub fn empty() -> Self {
        Self { features: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        Self::empty()
    }
}
