//! Map View Binding
//!
//! The rendering seam between the store and whatever map widget hosts the
//! explorer. The widget is modeled as the [`MapSurface`] trait: named vector
//! sources, styled layers, declarative paint expressions, and animated
//! camera moves. The store never talks to a concrete widget; tests use a
//! recording double.

mod binding;
mod camera;
mod colors;

pub use binding::MapBinding;
pub use camera::{camera_for_tr, ring_centroid, zoom_for_radius};
pub use colors::{assign_operator_colors, OperatorColorMap, OPERATOR_PALETTE};

use serde_json::Value;

/// An animated camera transition request.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraMove {
    /// Target center, lon/lat.
    pub center: [f64; 2],
    pub zoom: f64,
    pub duration_ms: u64,
}

/// Layer kinds the explorer styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Fill,
    Line,
    Circle,
}

/// A layer referencing a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub kind: LayerKind,
}

/// A declarative paint expression for a layer property.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintExpression {
    /// A single literal color.
    Color(String),
    /// Categorical match on a feature property: each case maps a property
    /// value to a color, with a required fallback.
    CategoricalMatch {
        property: String,
        cases: Vec<(String, String)>,
        fallback: String,
    },
}

impl PaintExpression {
    /// Serialize to the widget's expression-array form:
    /// `["match", ["get", prop], v1, c1, ..., fallback]`.
    pub fn to_expression(&self) -> Value {
        match self {
            Self::Color(c) => Value::String(c.clone()),
            Self::CategoricalMatch {
                property,
                cases,
                fallback,
            } => {
                let mut expr = vec![
                    Value::String("match".to_string()),
                    serde_json::json!(["get", property]),
                ];
                for (value, color) in cases {
                    expr.push(Value::String(value.clone()));
                    expr.push(Value::String(color.clone()));
                }
                expr.push(Value::String(fallback.clone()));
                Value::Array(expr)
            }
        }
    }
}

/// The map widget contract.
///
/// Implementations are expected to be cheap to call; the binding replaces
/// source data wholesale on every filter change.
pub trait MapSurface {
    /// Register a named vector source with initial data.
    fn add_source(&mut self, name: &str, data: Value);

    /// Replace a source's feature data wholesale.
    fn set_source_data(&mut self, name: &str, data: Value);

    /// Add a styled layer referencing a source.
    fn add_layer(&mut self, layer: LayerSpec);

    /// Set a layer's paint expression.
    fn set_paint(&mut self, layer_id: &str, paint: PaintExpression);

    /// Filter a layer to features whose `property` equals `value`.
    fn set_filter(&mut self, layer_id: &str, property: &str, value: &str);

    /// Animate the camera to a center/zoom over a duration.
    fn fly_to(&mut self, camera: CameraMove);

    /// Hit-test rendered features at a screen point, optionally scoped to a
    /// layer. Drives click/hover handling (well detail popups).
    fn features_at(&self, point: [f64; 2], layer_id: Option<&str>) -> Vec<Value> {
        let _ = (point, layer_id);
        Vec::new()
    }
}
