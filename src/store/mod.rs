//! Filter/Derivation Store
//!
//! The central state owner mediating between map interaction, backend
//! fetches, and chart derivations. State lives behind `Arc<RwLock<>>` so API
//! shells and bindings can read it from the async runtime; all mutation goes
//! through `MapStore` methods, and locks are never held across an await.
//!
//! ## Failure tiers
//!
//! - TR polygon loads are cosmetic: failures log and reset to empty.
//! - Wells and production fetches reset state to empty AND return the error
//!   so the UI can surface a notification.
//!
//! ## Staleness
//!
//! Selecting a new TR or radius while a wells fetch is in flight bumps a
//! generation counter; a response carrying an old generation is discarded
//! instead of overwriting newer state.

mod debounce;
pub mod filters;

pub use debounce::Debouncer;
pub use filters::FilterCriteria;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::analytics::{aggregate_percentiles, PercentileChart};
use crate::backend::{BackendError, WellBackend};
use crate::config::ExplorerConfig;
use crate::map::{assign_operator_colors, MapBinding, MapSurface, OperatorColorMap};
use crate::types::{
    ProductionSeries, TrCollection, WellCollection, WellProductionResponse,
};

/// Everything the explorer UI reads: selection, datasets, criteria, and
/// derived color assignments.
#[derive(Debug, Default)]
pub struct ExplorerState {
    /// Currently selected TR identifier, if any.
    pub selected_tr: Option<String>,

    /// Well-search radius around the selected TR, miles.
    pub radius_miles: f64,

    /// TR polygon layer, fetched once at startup.
    pub tr_collection: TrCollection,

    /// Wells for the current TR + radius, replaced wholesale per query.
    pub wells_data: WellCollection,

    /// User filter criteria; mutations trigger re-derivation, not refetch.
    pub criteria: FilterCriteria,

    /// True while a wells fetch is in flight.
    pub wells_loading: bool,

    /// Operator → color assignment for the current wells dataset.
    pub operator_colors: OperatorColorMap,

    /// Latest aggregate production series for the filtered well set.
    pub production: ProductionSeries,

    /// Wells request generation; stale responses are discarded against it.
    wells_generation: u64,
}

/// The map store: owns shared state, a backend handle, and the production
/// fetch debouncer.
pub struct MapStore<B: WellBackend> {
    backend: B,
    state: Arc<RwLock<ExplorerState>>,
    debouncer: Debouncer,
    fly_duration_ms: u64,
}

impl<B: WellBackend> MapStore<B> {
    /// Build a store from config-derived tuning values.
    pub fn new(backend: B, cfg: &ExplorerConfig) -> Self {
        let state = ExplorerState {
            radius_miles: cfg.map.default_radius_miles,
            criteria: FilterCriteria::new(cfg.map.min_lateral_ft, cfg.map.max_lateral_ft),
            ..ExplorerState::default()
        };

        Self {
            backend,
            state: Arc::new(RwLock::new(state)),
            debouncer: Debouncer::from_millis(cfg.production.debounce_ms),
            fly_duration_ms: cfg.map.fly_duration_ms,
        }
    }

    /// Shared state handle for read-side consumers.
    pub fn state(&self) -> Arc<RwLock<ExplorerState>> {
        Arc::clone(&self.state)
    }

    // ========================================================================
    // Remote data access
    // ========================================================================

    /// Load the TR polygon layer.
    ///
    /// Silent-reset failure tier: any error leaves an empty TR set and is
    /// only logged. The map simply has no grid to offer.
    pub async fn load_tr_options(&self) {
        match self.backend.tr_options().await {
            Ok(trs) => {
                info!(count = trs.len(), "TR polygon layer loaded");
                self.state.write().await.tr_collection = trs;
            }
            Err(e) => {
                warn!(error = %e, "TR polygon fetch failed — resetting to empty");
                self.state.write().await.tr_collection = TrCollection::empty();
            }
        }
    }

    /// Select a TR cell and refetch its wells.
    pub async fn select_tr(&self, tr: &str) -> Result<(), BackendError> {
        self.state.write().await.selected_tr = Some(tr.to_string());
        self.fetch_wells().await
    }

    /// Change the search radius and refetch wells for the current selection.
    pub async fn set_radius(&self, radius_miles: f64) -> Result<(), BackendError> {
        self.state.write().await.radius_miles = radius_miles;
        self.fetch_wells().await
    }

    /// Fetch wells for the current TR + radius.
    ///
    /// Propagating failure tier: on error the well set resets to empty and
    /// the error is returned. The loading flag is cleared on both paths. A
    /// response that lost the generation race is discarded untouched — the
    /// newer request owns the flag and the dataset.
    pub async fn fetch_wells(&self) -> Result<(), BackendError> {
        let (tr, radius, generation) = {
            let mut state = self.state.write().await;
            let Some(tr) = state.selected_tr.clone() else {
                return Ok(());
            };
            state.wells_generation += 1;
            state.wells_loading = true;
            (tr, state.radius_miles, state.wells_generation)
        };

        let result = self.backend.wells_by_tr(&tr, radius).await;

        let mut state = self.state.write().await;
        if state.wells_generation != generation {
            debug!(tr = %tr, generation, "Discarding stale wells response");
            return Ok(());
        }
        state.wells_loading = false;

        match result {
            Ok(wells) => {
                info!(tr = %tr, radius, count = wells.len(), "Wells loaded");
                state.operator_colors = assign_operator_colors(
                    wells
                        .features
                        .iter()
                        .filter_map(|f| f.properties.operator()),
                );
                state.wells_data = wells;
                Ok(())
            }
            Err(e) => {
                warn!(tr = %tr, error = %e, "Wells fetch failed — resetting to empty");
                state.wells_data = WellCollection::empty();
                state.operator_colors = OperatorColorMap::default();
                Err(e)
            }
        }
    }

    /// Single-well monthly series for the detail popup. Pass-through.
    pub async fn well_detail(&self, api_14: &str) -> Result<WellProductionResponse, BackendError> {
        self.backend.well_production(api_14).await
    }

    /// Debounced aggregate-production refresh for the filtered well set.
    ///
    /// Returns `Ok(None)` when superseded by a newer call inside the
    /// debounce window. An empty filtered set short-circuits to an empty
    /// chart without a network round trip. Errors reset the stored series
    /// and propagate.
    pub async fn refresh_production(
        &self,
    ) -> Result<Option<PercentileChart>, BackendError> {
        if !self.debouncer.quiesce().await {
            return Ok(None);
        }

        let apis: Vec<String> = {
            let state = self.state.read().await;
            filters::filtered_wells(&state.wells_data, &state.criteria)
                .features
                .iter()
                .filter_map(|f| f.properties.api_14.clone())
                .collect()
        };

        if apis.is_empty() {
            self.state.write().await.production = ProductionSeries::new();
            return Ok(Some(PercentileChart::default()));
        }

        match self.backend.aggregate_production(&apis).await {
            Ok(resp) => {
                info!(wells = resp.well_count, "Aggregate production loaded");
                self.state.write().await.production = resp.data.clone();
                Ok(Some(aggregate_percentiles(&resp.data)))
            }
            Err(e) => {
                warn!(error = %e, "Aggregate production fetch failed — resetting series");
                self.state.write().await.production = ProductionSeries::new();
                Err(e)
            }
        }
    }

    // ========================================================================
    // Filter criteria
    // ========================================================================

    /// Replace the selected operator set. Empty means pass-through.
    pub async fn set_operators<I: IntoIterator<Item = String>>(&self, operators: I) {
        self.state.write().await.criteria.operators = operators.into_iter().collect();
    }

    /// Replace the selected formation set. Empty means pass-through.
    pub async fn set_formations<I: IntoIterator<Item = String>>(&self, formations: I) {
        self.state.write().await.criteria.formations = formations.into_iter().collect();
    }

    /// Set the inclusive lateral-length range, feet.
    pub async fn set_lateral_range(&self, min_ft: f64, max_ft: f64) {
        let mut state = self.state.write().await;
        state.criteria.lateral_min_ft = min_ft;
        state.criteria.lateral_max_ft = max_ft;
    }

    // ========================================================================
    // Derivations
    // ========================================================================

    /// The filtered well subset under the current criteria.
    pub async fn filtered_wells(&self) -> WellCollection {
        let state = self.state.read().await;
        filters::filtered_wells(&state.wells_data, &state.criteria)
    }

    /// Distinct operator names present in the current dataset.
    pub async fn available_operators(&self) -> Vec<String> {
        filters::available_operators(&self.state.read().await.wells_data)
    }

    /// Distinct formation names present in the current dataset.
    pub async fn available_formations(&self) -> Vec<String> {
        filters::available_formations(&self.state.read().await.wells_data)
    }

    // ========================================================================
    // Map binding
    // ========================================================================

    /// Push current state into a map binding: TR grid, the filtered well
    /// set recolored by operator, and (if a TR is selected) the highlight
    /// filter plus a camera move to its centroid.
    pub async fn sync_map<S: MapSurface>(&self, binding: &mut MapBinding<S>) {
        let state = self.state.read().await;

        binding.set_tr_grid(&state.tr_collection);

        let filtered = filters::filtered_wells(&state.wells_data, &state.criteria);
        binding.sync_wells(&filtered, &state.operator_colors);

        if let Some(tr) = &state.selected_tr {
            binding.highlight_tr(tr);
            binding.fly_to_selection(
                &state.tr_collection,
                tr,
                state.radius_miles,
                self.fly_duration_ms,
            );
        }
    }
}
