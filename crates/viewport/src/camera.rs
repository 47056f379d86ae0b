//! Map camera with focus recentering, drag pan, and smooth zoom.
//!
//! The camera keeps two copies of its transform: a discrete *target*
//! `(scale, offset)` mutated by focus calls and gestures, and a *rendered*
//! state that approaches the target by exponential smoothing each update.
//! Consumers draw with the rendered state; the target is what the state
//! machine reasons about.

use foundation::math::{MapPoint, Vec2};

/// Scale applied when focusing a location.
pub const FOCUS_SCALE: f64 = 1.5;

/// Pan pixels per percent of distance from the map center on focus.
pub const FOCUS_OFFSET_PER_PERCENT: f64 = 10.0;

/// Zoom clamp range.
pub const MIN_SCALE: f64 = 0.3;
pub const MAX_SCALE: f64 = 4.0;

/// Wheel delta to exponential zoom rate.
const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Smoothing factor for the rendered state (higher = faster response).
const SMOOTHING: f64 = 8.0;

/// Pinch distances below this are degenerate (coincident touches).
const MIN_PINCH_DISTANCE: f64 = 1.0e-6;

/// Clamps a zoom level into the supported range. Idempotent.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    target_scale: f64,
    target_offset: Vec2,
    scale: f64,
    offset: Vec2,
    /// Last pointer position while a drag is active.
    drag_last: Option<Vec2>,
    /// Last distance between the two touch points while a pinch is active.
    pinch_last_distance: Option<f64>,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            target_scale: 1.0,
            target_offset: Vec2::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
            drag_last: None,
            pinch_last_distance: None,
        }
    }
}

impl MapCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered zoom level.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rendered pan offset in pixels.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    pub fn target_offset(&self) -> Vec2 {
        self.target_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// Recenters the camera on a percent-space location at the focus zoom.
    ///
    /// The offset is a pure function of the location, so repeated focus
    /// calls with the same point are idempotent. Gesture state is not
    /// consulted; a focus with no prior gesture history is well-defined.
    pub fn focus(&mut self, location: MapPoint) {
        let p = location.clamped();
        self.target_scale = FOCUS_SCALE;
        self.target_offset = Vec2::new(
            (50.0 - p.x) * FOCUS_OFFSET_PER_PERCENT,
            (50.0 - p.y) * FOCUS_OFFSET_PER_PERCENT,
        );
    }

    pub fn pointer_down(&mut self, pos_px: Vec2) {
        // A new drag supersedes any in-flight pinch.
        self.pinch_last_distance = None;
        self.drag_last = Some(pos_px);
    }

    /// Pans the surface directly by the pointer delta.
    ///
    /// Both the target and the rendered offset move, so the surface tracks
    /// the pointer with no easing lag while the drag is held.
    pub fn pointer_move(&mut self, pos_px: Vec2) {
        let Some(last) = self.drag_last else {
            return;
        };
        let delta = pos_px - last;
        self.target_offset += delta;
        self.offset += delta;
        self.drag_last = Some(pos_px);
    }

    /// Ends the drag. No release momentum.
    pub fn pointer_up(&mut self) {
        self.drag_last = None;
    }

    /// Multiplicative wheel zoom; positive deltas (scroll down) zoom out.
    pub fn wheel(&mut self, delta: f64) {
        let factor = (-delta * WHEEL_ZOOM_RATE).exp();
        self.target_scale = clamp_scale(self.target_scale * factor);
    }

    pub fn touch_start(&mut self, a_px: Vec2, b_px: Vec2) {
        self.drag_last = None;
        self.pinch_last_distance = Some(a_px.distance(b_px));
    }

    /// Scales by the ratio of the current touch spread to the previous
    /// sample. Coincident touches are skipped rather than divided by.
    pub fn touch_move(&mut self, a_px: Vec2, b_px: Vec2) {
        let Some(last) = self.pinch_last_distance else {
            return;
        };
        let distance = a_px.distance(b_px);
        if last > MIN_PINCH_DISTANCE {
            self.target_scale = clamp_scale(self.target_scale * (distance / last));
        }
        self.pinch_last_distance = Some(distance);
    }

    pub fn touch_end(&mut self) {
        self.pinch_last_distance = None;
    }

    /// Advances the rendered state toward the target.
    ///
    /// `dt_s` is capped so a stalled caller cannot teleport the camera.
    pub fn update(&mut self, dt_s: f64) {
        let dt = dt_s.clamp(0.0, 0.1);
        let alpha = 1.0 - (-SMOOTHING * dt).exp();
        self.scale += (self.target_scale - self.scale) * alpha;
        self.scale = clamp_scale(self.scale);
        self.offset += (self.target_offset - self.offset) * alpha;
    }

    /// Jumps the rendered state to the target (initial placement, tests).
    pub fn snap_to_target(&mut self) {
        self.scale = self.target_scale;
        self.offset = self.target_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::{FOCUS_SCALE, MAX_SCALE, MIN_SCALE, MapCamera, clamp_scale};
    use foundation::math::{MapPoint, Vec2};

    #[test]
    fn focus_on_center_is_identity_offset_at_focus_scale() {
        let mut cam = MapCamera::new();
        cam.focus(MapPoint::new(50.0, 50.0));
        assert_eq!(cam.target_offset(), Vec2::ZERO);
        assert_eq!(cam.target_scale(), FOCUS_SCALE);
    }

    #[test]
    fn focus_is_idempotent() {
        let mut a = MapCamera::new();
        a.focus(MapPoint::new(50.0, 50.0));
        let first = (a.target_scale(), a.target_offset());
        a.focus(MapPoint::new(50.0, 50.0));
        assert_eq!((a.target_scale(), a.target_offset()), first);
    }

    #[test]
    fn focus_offset_scales_with_distance_from_center() {
        let mut cam = MapCamera::new();
        cam.focus(MapPoint::new(45.0, 35.0));
        assert_eq!(cam.target_offset(), Vec2::new(50.0, 150.0));
    }

    #[test]
    fn focus_with_garbage_input_stays_finite() {
        let mut cam = MapCamera::new();
        cam.focus(MapPoint::new(f64::NAN, f64::INFINITY));
        assert!(cam.target_offset().x.is_finite());
        assert!(cam.target_offset().y.is_finite());
    }

    #[test]
    fn drag_pans_without_lag() {
        let mut cam = MapCamera::new();
        cam.pointer_down(Vec2::new(100.0, 100.0));
        cam.pointer_move(Vec2::new(130.0, 90.0));
        assert_eq!(cam.offset(), Vec2::new(30.0, -10.0));
        assert_eq!(cam.target_offset(), Vec2::new(30.0, -10.0));
        cam.pointer_up();
        cam.pointer_move(Vec2::new(200.0, 200.0));
        // Moves after release are ignored.
        assert_eq!(cam.offset(), Vec2::new(30.0, -10.0));
    }

    #[test]
    fn wheel_zoom_clamps_at_both_ends() {
        let mut cam = MapCamera::new();
        for _ in 0..100 {
            cam.wheel(-1_000.0);
        }
        assert_eq!(cam.target_scale(), MAX_SCALE);
        for _ in 0..100 {
            cam.wheel(1_000.0);
        }
        assert_eq!(cam.target_scale(), MIN_SCALE);
    }

    #[test]
    fn clamp_is_idempotent() {
        for s in [-1.0, 0.0, 0.3, 1.7, 4.0, 9.0] {
            assert_eq!(clamp_scale(clamp_scale(s)), clamp_scale(s));
        }
        assert_eq!(clamp_scale(f64::NAN), 1.0);
    }

    #[test]
    fn pinch_spread_zooms_in() {
        let mut cam = MapCamera::new();
        cam.touch_start(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        cam.touch_move(Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0));
        assert!((cam.target_scale() - 2.0).abs() < 1e-12);
        cam.touch_end();
    }

    #[test]
    fn coincident_touches_do_not_produce_nan() {
        let mut cam = MapCamera::new();
        cam.touch_start(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0));
        cam.touch_move(Vec2::new(40.0, 50.0), Vec2::new(60.0, 50.0));
        assert!(cam.target_scale().is_finite());
        assert_eq!(cam.target_scale(), 1.0);
        // The pinch recovers once the spread is real.
        cam.touch_move(Vec2::new(30.0, 50.0), Vec2::new(70.0, 50.0));
        assert!((cam.target_scale() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn update_approaches_target_without_overshoot() {
        let mut cam = MapCamera::new();
        cam.focus(MapPoint::new(45.0, 35.0));
        let mut last_gap = (cam.target_offset() - cam.offset()).length();
        for _ in 0..200 {
            cam.update(1.0 / 60.0);
            let gap = (cam.target_offset() - cam.offset()).length();
            assert!(gap <= last_gap + 1e-9);
            last_gap = gap;
        }
        assert!(last_gap < 1.0);
        assert!((cam.scale() - FOCUS_SCALE).abs() < 0.01);
    }

    #[test]
    fn update_caps_large_steps() {
        let mut cam = MapCamera::new();
        cam.focus(MapPoint::new(0.0, 0.0));
        cam.update(1_000.0);
        // A huge dt behaves like one capped step, not a teleport.
        assert!((cam.target_offset() - cam.offset()).length() > 1.0);
    }
}
