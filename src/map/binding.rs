//! Pushes explorer state into a map surface.

use tracing::debug;

use super::{
    camera_for_tr, colors::FALLBACK_COLOR, LayerKind, LayerSpec, MapSurface, OperatorColorMap,
    PaintExpression,
};
use crate::types::{TrCollection, WellCollection};

/// Source and layer names the binding installs on its surface.
pub const TR_SOURCE: &str = "tr-grid";
pub const TR_FILL_LAYER: &str = "tr-grid-fill";
pub const TR_HIGHLIGHT_LAYER: &str = "tr-grid-selected";
pub const WELLS_SOURCE: &str = "wells";
pub const WELLS_LAYER: &str = "wells-laterals";

/// Owns a [`MapSurface`] and keeps it in sync with the store's derived state.
///
/// All push operations are one-way and wholesale: a new filtered set replaces
/// the wells source entirely. Failures in this path (unserializable data,
/// missing geometry) are logged and swallowed — the map just doesn't update.
pub struct MapBinding<S: MapSurface> {
    surface: S,
}

impl<S: MapSurface> MapBinding<S> {
    /// Wrap a surface and install the explorer's sources and layers.
    pub fn new(mut surface: S) -> Self {
        surface.add_source(TR_SOURCE, serde_json::json!({
            "type": "FeatureCollection",
            "features": []
        }));
        surface.add_source(WELLS_SOURCE, serde_json::json!({
            "type": "FeatureCollection",
            "features": []
        }));

        surface.add_layer(LayerSpec {
            id: TR_FILL_LAYER.to_string(),
            source: TR_SOURCE.to_string(),
            kind: LayerKind::Fill,
        });
        surface.add_layer(LayerSpec {
            id: TR_HIGHLIGHT_LAYER.to_string(),
            source: TR_SOURCE.to_string(),
            kind: LayerKind::Line,
        });
        surface.add_layer(LayerSpec {
            id: WELLS_LAYER.to_string(),
            source: WELLS_SOURCE.to_string(),
            kind: LayerKind::Line,
        });

        Self { surface }
    }

    /// Replace the TR polygon layer.
    pub fn set_tr_grid(&mut self, trs: &TrCollection) {
        match serde_json::to_value(trs) {
            Ok(data) => self.surface.set_source_data(TR_SOURCE, data),
            Err(e) => debug!(error = %e, "TR grid not serializable — map not updated"),
        }
    }

    /// Replace the wells source with the filtered set and recolor by operator.
    pub fn sync_wells(&mut self, wells: &WellCollection, colors: &OperatorColorMap) {
        match serde_json::to_value(wells) {
            Ok(data) => self.surface.set_source_data(WELLS_SOURCE, data),
            Err(e) => {
                debug!(error = %e, "Well set not serializable — map not updated");
                return;
            }
        }

        self.surface.set_paint(
            WELLS_LAYER,
            PaintExpression::CategoricalMatch {
                property: "env_operator".to_string(),
                cases: colors.pairs().to_vec(),
                fallback: FALLBACK_COLOR.to_string(),
            },
        );
    }

    /// Outline the selected TR cell.
    pub fn highlight_tr(&mut self, tr: &str) {
        self.surface.set_filter(TR_HIGHLIGHT_LAYER, "tr", tr);
    }

    /// Fly to the selected TR's centroid at a radius-derived zoom.
    ///
    /// A no-op when the TR is unknown or its geometry is unusable.
    pub fn fly_to_selection(
        &mut self,
        trs: &TrCollection,
        tr: &str,
        radius_miles: f64,
        duration_ms: u64,
    ) {
        if let Some(camera) = camera_for_tr(trs, tr, radius_miles, duration_ms) {
            self.surface.fly_to(camera);
        }
    }

    /// Access the wrapped surface (for embedding shells that need it back).
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
