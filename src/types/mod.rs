//! Shared data structures for the TR well explorer
//!
//! This module defines the wire and domain types the rest of the crate works
//! with:
//! - GeoJSON feature collections as the backend serializes them from PostGIS
//! - Well and TR feature properties (operator, formation, lateral length)
//! - Production envelopes for the single-well and batch-aggregate endpoints

pub mod geojson;
mod production;
mod well;

pub use geojson::{Feature, FeatureCollection, Geometry, Position};
pub use production::{
    AggregateProductionResponse, MonthlyOil, ProductionRecord, ProductionSeries,
    WellProductionResponse,
};
pub use well::{TrCollection, TrProperties, WellCollection, WellProperties};
