//! Remote Data Access
//!
//! The `WellBackend` trait is the seam between the store and the REST
//! service: the store orchestrates fetches against the trait, the HTTP
//! implementation lives in [`http`], and tests substitute scripted doubles.
//!
//! Every operation normalizes its failures — transport errors, non-2xx
//! statuses, malformed payloads, and envelope-encoded failures — into one
//! [`BackendError`] path. No retries, no backoff: single-attempt fetches
//! throughout.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;

use crate::types::{
    AggregateProductionResponse, TrCollection, WellCollection, WellProductionResponse,
};

/// Backend client errors
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Backend reported failure: {0}")]
    Envelope(String),
}

/// The REST surface the explorer consumes.
///
/// One method per endpoint; each replaces the caller's prior state wholesale
/// on success.
#[async_trait]
pub trait WellBackend: Send + Sync {
    /// GET `/tr` — the township/range polygon layer.
    async fn tr_options(&self) -> Result<TrCollection, BackendError>;

    /// GET `/wells/{tr}?radius=N` — wells within `radius_miles` of the TR
    /// centroid.
    async fn wells_by_tr(&self, tr: &str, radius_miles: f64)
        -> Result<WellCollection, BackendError>;

    /// GET `/wells/{api}/production` — one well's monthly oil/gas series.
    async fn well_production(&self, api_14: &str)
        -> Result<WellProductionResponse, BackendError>;

    /// POST `/wells/aggregate-production` — normalized monthly oil for a
    /// batch of wells. A 2xx reply with `success: false` is an error.
    async fn aggregate_production(
        &self,
        apis: &[String],
    ) -> Result<AggregateProductionResponse, BackendError>;
}
