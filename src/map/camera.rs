//! Camera math for TR selection.
//!
//! Centroid and zoom derivations are deliberately simple: the camera target
//! is the arithmetic mean of the polygon's first ring, and zoom is a fixed
//! function of search radius. Any malformed geometry means the view simply
//! does not move — lenient by design for a visualization path.

use tracing::debug;

use super::CameraMove;
use crate::types::geojson::Position;
use crate::types::TrCollection;

/// Arithmetic-mean centroid of a polygon ring.
///
/// Returns `None` for an empty ring.
pub fn ring_centroid(ring: &[Position]) -> Option<Position> {
    if ring.is_empty() {
        return None;
    }

    let n = ring.len() as f64;
    let (sum_x, sum_y) = ring
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));

    Some([sum_x / n, sum_y / n])
}

/// Zoom level for a search radius in miles: `12 - log2(radius / 2.5)`.
///
/// Monotonically decreasing in radius — a wider search gets a wider view.
/// Calibrated so radius 10 lands on a town-scale zoom of 10, and radius 2.5
/// on 12. This is a product contract, not a projection formula; keep it
/// byte-stable.
pub fn zoom_for_radius(radius_miles: f64) -> f64 {
    12.0 - (radius_miles / 2.5).log2()
}

/// Build the camera move for a selected TR, or `None` if the TR is unknown
/// or its geometry has no usable ring.
pub fn camera_for_tr(
    trs: &TrCollection,
    tr: &str,
    radius_miles: f64,
    duration_ms: u64,
) -> Option<CameraMove> {
    let feature = trs.features.iter().find(|f| f.properties.tr == tr);

    let Some(feature) = feature else {
        debug!(tr = %tr, "TR not found in polygon layer — skipping camera move");
        return None;
    };

    let centroid = feature
        .geometry
        .as_ref()
        .and_then(|g| g.first_ring())
        .and_then(ring_centroid);

    let Some(center) = centroid else {
        debug!(tr = %tr, "TR geometry has no usable ring — skipping camera move");
        return None;
    };

    Some(CameraMove {
        center,
        zoom: zoom_for_radius(radius_miles),
        duration_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feature, Geometry, TrProperties};

    fn tr_feature(tr: &str, geometry: Option<Geometry>) -> Feature<TrProperties> {
        Feature {
            geometry,
            properties: TrProperties {
                id: None,
                basin: Some("DJ".to_string()),
                state: Some("CO".to_string()),
                tr: tr.to_string(),
            },
        }
    }

    #[test]
    fn test_centroid_of_unit_square() {
        let ring = [[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]];
        assert_eq!(ring_centroid(&ring), Some([1.0, 1.0]));
    }

    #[test]
    fn test_centroid_of_empty_ring() {
        assert_eq!(ring_centroid(&[]), None);
    }

    #[test]
    fn test_zoom_contract_values() {
        assert!((zoom_for_radius(10.0) - 10.0).abs() < 1e-12);
        assert!((zoom_for_radius(2.5) - 12.0).abs() < 1e-12);
        assert!((zoom_for_radius(5.0) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_decreases_with_radius() {
        assert!(zoom_for_radius(5.0) > zoom_for_radius(10.0));
        assert!(zoom_for_radius(10.0) > zoom_for_radius(15.0));
    }

    #[test]
    fn test_camera_for_selected_tr() {
        let trs = TrCollection {
            features: vec![tr_feature(
                "3N65W",
                Some(Geometry::Polygon {
                    coordinates: vec![vec![[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]],
                }),
            )],
        };

        let cam = camera_for_tr(&trs, "3N65W", 10.0, 2000).unwrap();
        assert_eq!(cam.center, [1.0, 1.0]);
        assert!((cam.zoom - 10.0).abs() < 1e-12);
        assert_eq!(cam.duration_ms, 2000);
    }

    #[test]
    fn test_unknown_tr_yields_no_move() {
        let trs = TrCollection::empty();
        assert!(camera_for_tr(&trs, "9S99W", 10.0, 2000).is_none());
    }

    #[test]
    fn test_point_geometry_yields_no_move() {
        let trs = TrCollection {
            features: vec![tr_feature(
                "3N65W",
                Some(Geometry::Point { coordinates: [1.0, 1.0] }),
            )],
        };
        assert!(camera_for_tr(&trs, "3N65W", 10.0, 2000).is_none());
    }
}
