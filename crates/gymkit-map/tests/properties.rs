//! Property tests for the viewport and the plan queue.

use proptest::prelude::*;

use gymkit_core::data::Catalog;
use gymkit_map::{build_plan, GestureOutcome, Highlight, PlanIntent, Viewport, MAX_SCALE, MIN_SCALE};

proptest! {
    /// Any sequence of zoom steps keeps the scale inside the supported
    /// range.
    #[test]
    fn zoom_scale_stays_clamped(steps in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut vp = Viewport::new();
        for zoom_in in steps {
            if zoom_in {
                vp.zoom_in();
            } else {
                vp.zoom_out();
            }
            prop_assert!(vp.scale() >= MIN_SCALE);
            prop_assert!(vp.scale() <= MAX_SCALE);
        }
    }

    /// A gesture staying within the drag threshold never moves the
    /// committed offset and classifies as a tap.
    #[test]
    fn sub_threshold_gesture_is_a_tap(
        press in (-500.0f32..500.0, -500.0f32..500.0),
        // Kept clear of the exact threshold so rounding in the
        // pointer-delta subtraction cannot tip the classification
        dx in -4.9f32..=4.9,
        dy in -4.9f32..=4.9,
    ) {
        let mut vp = Viewport::new();
        vp.begin_drag(press.0, press.1);
        vp.update_drag(press.0 + dx, press.1 + dy);
        prop_assert_eq!(vp.end_drag(), GestureOutcome::Tap);
        prop_assert_eq!(vp.offset_x(), 0.0);
        prop_assert_eq!(vp.offset_y(), 0.0);
    }

    /// A gesture past the threshold commits the displacement and
    /// suppresses the tap.
    #[test]
    fn over_threshold_gesture_commits_offset(
        press in (-500.0f32..500.0, -500.0f32..500.0),
        dx in prop_oneof![-400.0f32..-5.1, 5.1f32..400.0],
        dy in -400.0f32..400.0,
    ) {
        let mut vp = Viewport::new();
        vp.begin_drag(press.0, press.1);
        vp.update_drag(press.0 + dx, press.1 + dy);
        prop_assert_eq!(vp.end_drag(), GestureOutcome::Drag);
        prop_assert!((vp.offset_x() - dx).abs() < 1e-2);
        prop_assert!((vp.offset_y() - dy).abs() < 1e-2);
    }

    /// Advancing the queue removes at most one entry per call and never
    /// grows it.
    #[test]
    fn queue_advance_is_monotonic(ids in prop::collection::vec("[a-z_0-9]{1,8}", 0..24)) {
        let catalog = Catalog::demo_floor();
        let mut queue = build_plan(PlanIntent::FullBody, &catalog);
        let mut len = queue.len();
        for id in ids {
            let removed = queue.advance(&id);
            let expected = if removed { len - 1 } else { len };
            prop_assert_eq!(queue.len(), expected);
            len = queue.len();
        }
    }

    /// Exactly one id classifies as the next target while the queue is
    /// non-empty, and every next target is also queued.
    #[test]
    fn next_target_is_exclusive(drops in prop::collection::vec(0usize..22, 0..4)) {
        let catalog = Catalog::demo_floor();
        let mut queue = build_plan(PlanIntent::Chest, &catalog);
        for index in drops {
            let id = catalog.list_all()[index].id.clone();
            queue.advance(&id);
        }
        let all = catalog.list_all();
        let next: Vec<_> = all.iter().filter(|e| queue.is_next_target(&e.id)).collect();
        if queue.is_empty() {
            prop_assert!(next.is_empty());
        } else {
            prop_assert_eq!(next.len(), 1);
        }
        for e in all {
            if queue.is_next_target(&e.id) {
                prop_assert!(queue.is_queued(&e.id));
                prop_assert_eq!(queue.highlight(&e.id), Highlight::Next);
            }
        }
    }
}
