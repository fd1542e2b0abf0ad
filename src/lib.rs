//! TR Well Explorer: map-centric well exploration core
//!
//! Client-side state, filtering, and derivation layer for exploring oil/gas
//! wells by township/range (TR) cell. Mediates between map interaction, a
//! well-data REST backend, and chart rendering.
//!
//! ## Architecture
//!
//! - **Store**: selection + filter state, pure well-set derivations, and
//!   fetch orchestration with stale-response discard and debounced
//!   production refresh
//! - **Backend**: the REST client seam (`WellBackend` trait + HTTP impl)
//! - **Map**: the rendering seam (`MapSurface`), camera math, operator colors
//! - **Analytics**: P10/P50/P90 nearest-rank aggregation and stats helpers

pub mod analytics;
pub mod backend;
pub mod config;
pub mod export;
pub mod map;
pub mod store;
pub mod types;

// Re-export configuration
pub use config::ExplorerConfig;

// Re-export commonly used types
pub use types::{
    AggregateProductionResponse, Feature, FeatureCollection, Geometry, MonthlyOil,
    ProductionSeries, TrCollection, TrProperties, WellCollection, WellProductionResponse,
    WellProperties,
};

// Re-export the store
pub use store::{ExplorerState, FilterCriteria, MapStore};

// Re-export the backend seam
pub use backend::{BackendError, HttpBackend, WellBackend};

// Re-export map binding components
pub use map::{CameraMove, MapBinding, MapSurface, OperatorColorMap, PaintExpression};

// Re-export analytics
pub use analytics::{aggregate_percentiles, PercentileChart};
