//! HTTP implementation of the well-data backend.

use async_trait::async_trait;

use super::{BackendError, WellBackend};
use crate::types::{
    AggregateProductionResponse, TrCollection, WellCollection, WellProductionResponse,
};

/// HTTP client for the well-data REST service.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the global explorer config.
    pub fn from_config(cfg: &crate::config::BackendConfig) -> Result<Self, BackendError> {
        Self::new(&cfg.base_url, cfg.timeout_secs)
    }

    /// Base URL for logging
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and decode the body, mapping non-2xx to `Status`.
    ///
    /// Decoding goes through raw bytes rather than `Response::json` so that
    /// a wrong-shaped payload surfaces as `Decode` with serde's field-level
    /// detail.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, BackendError> {
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl WellBackend for HttpBackend {
    async fn tr_options(&self) -> Result<TrCollection, BackendError> {
        self.get_json(format!("{}/tr", self.base_url)).await
    }

    async fn wells_by_tr(
        &self,
        tr: &str,
        radius_miles: f64,
    ) -> Result<WellCollection, BackendError> {
        self.get_json(format!(
            "{}/wells/{}?radius={}",
            self.base_url, tr, radius_miles
        ))
        .await
    }

    async fn well_production(
        &self,
        api_14: &str,
    ) -> Result<WellProductionResponse, BackendError> {
        self.get_json(format!("{}/wells/{}/production", self.base_url, api_14))
            .await
    }

    async fn aggregate_production(
        &self,
        apis: &[String],
    ) -> Result<AggregateProductionResponse, BackendError> {
        let body = serde_json::json!({ "apis": apis });

        let resp = self
            .http
            .post(format!("{}/wells/aggregate-production", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let bytes = resp.bytes().await?;
        let envelope: AggregateProductionResponse = serde_json::from_slice(&bytes)?;

        // The service can report failure inside a 200 reply; treat it the
        // same as a transport error so callers have a single failure path.
        if !envelope.success {
            return Err(BackendError::Envelope(
                "aggregate-production returned success=false".to_string(),
            ));
        }

        Ok(envelope)
    }
}
