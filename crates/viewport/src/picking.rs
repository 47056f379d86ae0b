//! Deterministic pin picking against the rendered map transform.
//!
//! Ordering contract:
//! - The nearest pin within the pick radius wins.
//! - Pins at the same distance tie-break by ascending id, so results do
//!   not depend on input order.

use crate::camera::MapCamera;
use foundation::math::{MapPoint, Vec2};

/// Pixel geometry of the fixed viewport and the oversized map surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceGeometry {
    pub viewport_px: Vec2,
    pub surface_px: Vec2,
}

impl SurfaceGeometry {
    /// The map surface renders at twice the viewport size, matching the
    /// oversized-surface layout the camera offsets were tuned for.
    pub fn for_viewport(width_px: f64, height_px: f64) -> Self {
        let viewport = Vec2::new(width_px.max(1.0), height_px.max(1.0));
        Self {
            viewport_px: viewport,
            surface_px: viewport * 2.0,
        }
    }

    fn px_per_percent(&self) -> Vec2 {
        self.surface_px * (1.0 / 100.0)
    }
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self::for_viewport(1280.0, 720.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PinKind {
    Moment,
    Creator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub kind: PinKind,
    pub id: String,
    pub position: MapPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinHit {
    pub kind: PinKind,
    pub id: String,
    pub distance_percent: f64,
}

/// Screen position of a percent-space point under the rendered transform.
pub fn project(geometry: SurfaceGeometry, camera: &MapCamera, p: MapPoint) -> Vec2 {
    let center = geometry.viewport_px * 0.5;
    let k = geometry.px_per_percent();
    let local = Vec2::new((p.x - 50.0) * k.x, (p.y - 50.0) * k.y);
    center + camera.offset() + local * camera.scale()
}

/// Inverse of [`project`]: maps a viewport pixel back to percent space.
///
/// The rendered scale is clamped away from zero, so the inverse is always
/// well-defined.
pub fn unproject(geometry: SurfaceGeometry, camera: &MapCamera, screen_px: Vec2) -> MapPoint {
    let center = geometry.viewport_px * 0.5;
    let k = geometry.px_per_percent();
    let local = (screen_px - center - camera.offset()) * (1.0 / camera.scale());
    MapPoint::new(50.0 + local.x / k.x, 50.0 + local.y / k.y)
}

/// Nearest pin within `radius_percent` of the cursor, if any.
pub fn pick_pin(
    pins: &[Pin],
    cursor_px: Vec2,
    geometry: SurfaceGeometry,
    camera: &MapCamera,
    radius_percent: f64,
) -> Option<PinHit> {
    let cursor = unproject(geometry, camera, cursor_px);

    let mut best: Option<(f64, &Pin)> = None;
    for pin in pins {
        let d = distance_percent(cursor, pin.position);
        if d > radius_percent {
            continue;
        }
        best = match best {
            None => Some((d, pin)),
            Some((bd, bp)) => {
                let ord = d.total_cmp(&bd).then_with(|| pin.id.cmp(&bp.id));
                if ord.is_lt() { Some((d, pin)) } else { Some((bd, bp)) }
            }
        };
    }

    best.map(|(d, pin)| PinHit {
        kind: pin.kind,
        id: pin.id.clone(),
        distance_percent: d,
    })
}

fn distance_percent(a: MapPoint, b: MapPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::{Pin, PinKind, SurfaceGeometry, pick_pin, project, unproject};
    use crate::camera::MapCamera;
    use foundation::math::{MapPoint, Vec2};

    fn pin(kind: PinKind, id: &str, x: f64, y: f64) -> Pin {
        Pin {
            kind,
            id: id.to_string(),
            position: MapPoint::new(x, y),
        }
    }

    #[test]
    fn project_unproject_round_trips() {
        let geometry = SurfaceGeometry::default();
        let mut camera = MapCamera::new();
        camera.focus(MapPoint::new(45.0, 35.0));
        camera.snap_to_target();

        let p = MapPoint::new(62.5, 18.0);
        let back = unproject(geometry, &camera, project(geometry, &camera, p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn center_of_viewport_maps_to_map_center_at_rest() {
        let geometry = SurfaceGeometry::for_viewport(1000.0, 800.0);
        let camera = MapCamera::new();
        let p = unproject(geometry, &camera, Vec2::new(500.0, 400.0));
        assert_eq!(p, MapPoint::new(50.0, 50.0));
    }

    #[test]
    fn picks_nearest_pin_within_radius() {
        let geometry = SurfaceGeometry::default();
        let camera = MapCamera::new();
        let pins = vec![
            pin(PinKind::Moment, "m2", 55.0, 60.0),
            pin(PinKind::Moment, "m10", 50.0, 50.0),
            pin(PinKind::Creator, "i2", 52.0, 48.0),
        ];

        let cursor = project(geometry, &camera, MapPoint::new(50.4, 49.8));
        let hit = pick_pin(&pins, cursor, geometry, &camera, 3.0).expect("hit");
        assert_eq!(hit.id, "m10");
        assert_eq!(hit.kind, PinKind::Moment);
    }

    #[test]
    fn tie_breaks_by_ascending_id() {
        let geometry = SurfaceGeometry::default();
        let camera = MapCamera::new();
        let pins = vec![
            pin(PinKind::Moment, "m9", 50.0, 50.0),
            pin(PinKind::Moment, "m1", 50.0, 50.0),
        ];
        let cursor = project(geometry, &camera, MapPoint::new(50.0, 50.0));
        let hit = pick_pin(&pins, cursor, geometry, &camera, 3.0).expect("hit");
        assert_eq!(hit.id, "m1");
    }

    #[test]
    fn misses_outside_radius() {
        let geometry = SurfaceGeometry::default();
        let camera = MapCamera::new();
        let pins = vec![pin(PinKind::Moment, "m1", 10.0, 10.0)];
        let cursor = project(geometry, &camera, MapPoint::new(90.0, 90.0));
        assert!(pick_pin(&pins, cursor, geometry, &camera, 3.0).is_none());
    }
}
