//! Viewport transformation for the map surface.
//!
//! Handles the pan offset and zoom scale applied to the facility floor
//! plan, and turns raw press-move-release pointer input into either a pan
//! or a tap. The viewport lives only as long as the map screen instance;
//! navigating away and back recreates it at the identity transform.

use serde::{Deserialize, Serialize};

/// Minimum zoom scale.
pub const MIN_SCALE: f32 = 0.5;
/// Maximum zoom scale.
pub const MAX_SCALE: f32 = 3.0;
/// Scale change applied by one zoom-in/zoom-out step.
pub const ZOOM_STEP: f32 = 0.2;

/// Pointer movement (per axis) beyond which a gesture counts as a drag
/// instead of a tap.
const DRAG_THRESHOLD: f32 = 5.0;

/// How a completed pointer gesture should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// Below the drag threshold: treat the release as a tap/select. The
    /// pan offset has been restored to its value at press.
    Tap,
    /// The gesture panned the map; the new offset is committed.
    Drag,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Pointer position at press.
    press_x: f32,
    press_y: f32,
    /// Offset at press, restored when the gesture turns out to be a tap.
    press_offset_x: f32,
    press_offset_y: f32,
    /// Latched once movement exceeds the threshold.
    dragging: bool,
}

/// Pan/zoom state of the map surface.
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    drag: Option<DragState>,
}

impl Viewport {
    /// Create a viewport at the identity transform.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            drag: None,
        }
    }

    /// Current zoom scale (1.0 = 100%).
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current pan offset (X coordinate).
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Current pan offset (Y coordinate).
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Whether a pointer gesture is currently being tracked.
    pub fn gesture_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Zoom in by one step, clamped to [`MAX_SCALE`].
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + ZOOM_STEP);
    }

    /// Zoom out by one step, clamped to [`MIN_SCALE`].
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - ZOOM_STEP);
    }

    /// Set the zoom scale, clamped to the supported range.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Restore the identity transform and drop any tracked gesture.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.drag = None;
    }

    /// Begin tracking a pointer gesture at the given position.
    ///
    /// Input is single-pointer; a second press while one gesture is
    /// tracked replaces the first atomically (last writer wins).
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = Some(DragState {
            press_x: x,
            press_y: y,
            press_offset_x: self.offset_x,
            press_offset_y: self.offset_y,
            dragging: false,
        });
    }

    /// Move the tracked pointer, updating the pan offset live.
    ///
    /// Returns the new offset. Ignored when no gesture is being tracked.
    pub fn update_drag(&mut self, x: f32, y: f32) -> (f32, f32) {
        if let Some(drag) = &mut self.drag {
            let dx = x - drag.press_x;
            let dy = y - drag.press_y;
            if dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD {
                drag.dragging = true;
            }
            self.offset_x = drag.press_offset_x + dx;
            self.offset_y = drag.press_offset_y + dy;
        }
        (self.offset_x, self.offset_y)
    }

    /// Release the pointer and classify the gesture.
    ///
    /// A tap restores the offset captured at press so a sub-threshold
    /// wobble never moves the map. Returns `Tap` when no gesture was
    /// being tracked.
    pub fn end_drag(&mut self) -> GestureOutcome {
        match self.drag.take() {
            Some(drag) if drag.dragging => GestureOutcome::Drag,
            Some(drag) => {
                self.offset_x = drag.press_offset_x;
                self.offset_y = drag.press_offset_y;
                GestureOutcome::Tap
            }
            None => GestureOutcome::Tap,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.offset_x, self.offset_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut vp = Viewport::new();
        for _ in 0..8 {
            vp.zoom_in();
            assert!(vp.scale() <= MAX_SCALE);
        }
        // Enough further steps to hit the ceiling and stick there
        for _ in 0..8 {
            vp.zoom_in();
        }
        assert!((vp.scale() - MAX_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut vp = Viewport::new();
        for _ in 0..8 {
            vp.zoom_out();
        }
        assert!((vp.scale() - MIN_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut vp = Viewport::new();
        vp.zoom_in();
        vp.begin_drag(0.0, 0.0);
        vp.update_drag(40.0, -30.0);
        vp.end_drag();

        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset_x(), 0.0);
        assert_eq!(vp.offset_y(), 0.0);
        assert!(!vp.gesture_active());
    }

    #[test]
    fn test_drag_commits_offset() {
        let mut vp = Viewport::new();
        vp.begin_drag(100.0, 100.0);
        vp.update_drag(150.0, 80.0);
        assert_eq!(vp.end_drag(), GestureOutcome::Drag);
        assert_eq!(vp.offset_x(), 50.0);
        assert_eq!(vp.offset_y(), -20.0);
    }

    #[test]
    fn test_tap_restores_offset() {
        let mut vp = Viewport::new();
        vp.begin_drag(100.0, 100.0);
        vp.update_drag(103.0, 98.0);
        assert_eq!(vp.end_drag(), GestureOutcome::Tap);
        assert_eq!(vp.offset_x(), 0.0);
        assert_eq!(vp.offset_y(), 0.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 5 units is still a tap; the threshold must be exceeded
        let mut vp = Viewport::new();
        vp.begin_drag(0.0, 0.0);
        vp.update_drag(5.0, 5.0);
        assert_eq!(vp.end_drag(), GestureOutcome::Tap);
    }

    #[test]
    fn test_drag_latches_once_exceeded() {
        // Moving out past the threshold and back near the press point is
        // still a drag: classification never reverts within a gesture
        let mut vp = Viewport::new();
        vp.begin_drag(0.0, 0.0);
        vp.update_drag(30.0, 0.0);
        vp.update_drag(1.0, 0.0);
        assert_eq!(vp.end_drag(), GestureOutcome::Drag);
        assert_eq!(vp.offset_x(), 1.0);
    }

    #[test]
    fn test_drag_resumes_from_committed_offset() {
        let mut vp = Viewport::new();
        vp.begin_drag(0.0, 0.0);
        vp.update_drag(50.0, 0.0);
        vp.end_drag();

        vp.begin_drag(200.0, 0.0);
        vp.update_drag(210.0, 0.0);
        vp.end_drag();
        assert_eq!(vp.offset_x(), 60.0);
    }

    #[test]
    fn test_second_begin_drag_overrides_first() {
        let mut vp = Viewport::new();
        vp.begin_drag(0.0, 0.0);
        vp.update_drag(100.0, 0.0);
        // New press replaces the tracked gesture; the fresh one is a tap
        vp.begin_drag(500.0, 500.0);
        vp.update_drag(501.0, 500.0);
        assert_eq!(vp.end_drag(), GestureOutcome::Tap);
        // Tap restores the offset captured at the *second* press
        assert_eq!(vp.offset_x(), 100.0);
    }

    #[test]
    fn test_update_without_begin_is_ignored() {
        let mut vp = Viewport::new();
        let (x, y) = vp.update_drag(500.0, 500.0);
        assert_eq!((x, y), (0.0, 0.0));
        assert_eq!(vp.end_drag(), GestureOutcome::Tap);
    }
}
