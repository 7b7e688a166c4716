//! Map screen state.
//!
//! Composes the viewport, the selection model, and the active floor into
//! the working state of one map screen instance. A `MapView` is created
//! fresh every time the user enters the map, so the viewport always comes
//! back at the identity transform.

use gymkit_core::data::{Catalog, EquipmentRecord};

use crate::node::{node_descriptor, NodeDescriptor};
use crate::plan::PlanQueue;
use crate::selection::SelectionModel;
use crate::viewport::{GestureOutcome, Viewport};
use crate::zones::{floor_zones, FloorZone};

/// Default floor shown when the map opens.
const DEFAULT_FLOOR: i32 = 2;

/// Working state of the facility map screen.
#[derive(Debug, Clone)]
pub struct MapView {
    active_floor: i32,
    viewport: Viewport,
    selection: SelectionModel,
}

impl MapView {
    /// Open the map on the default floor at the identity transform.
    pub fn new() -> Self {
        Self {
            active_floor: DEFAULT_FLOOR,
            viewport: Viewport::new(),
            selection: SelectionModel::new(),
        }
    }

    /// The floor currently shown.
    pub fn active_floor(&self) -> i32 {
        self.active_floor
    }

    /// Switch the visible floor. Selection is kept; the user may have
    /// focused equipment on another floor intentionally.
    pub fn set_floor(&mut self, floor: i32) {
        if floor != self.active_floor {
            tracing::debug!(floor, "Switching map floor");
            self.active_floor = floor;
        }
    }

    /// Read access to the viewport transform.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access for zoom controls.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The selection model.
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Equipment standing on the visible floor, in catalog order.
    pub fn visible_equipment<'a>(&self, catalog: &'a Catalog) -> Vec<&'a EquipmentRecord> {
        catalog.filter_by_floor(self.active_floor)
    }

    /// Zones of the visible floor.
    pub fn visible_zones(&self) -> Vec<FloorZone> {
        floor_zones(self.active_floor)
    }

    /// Render descriptors for the visible floor, paired with records.
    pub fn node_descriptors<'a>(
        &self,
        catalog: &'a Catalog,
        queue: &PlanQueue,
    ) -> Vec<(&'a EquipmentRecord, NodeDescriptor)> {
        let selected = self.selection.effective_id(queue).map(str::to_string);
        self.visible_equipment(catalog)
            .into_iter()
            .map(|e| (e, node_descriptor(e, queue, selected.as_deref())))
            .collect()
    }

    /// Pointer pressed on the map surface.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.viewport.begin_drag(x, y);
    }

    /// Pointer moved while pressed.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> (f32, f32) {
        self.viewport.update_drag(x, y)
    }

    /// Pointer released; returns how the gesture classified.
    ///
    /// On `Tap` the presentation layer should deliver the tap to the node
    /// under the pointer via [`MapView::select_equipment`]; on `Drag` the
    /// tap is suppressed and the pan is already committed.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        self.viewport.end_drag()
    }

    /// Focus equipment on the map. Unknown ids are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select_equipment(&mut self, catalog: &Catalog, id: &str) -> bool {
        self.selection.select(catalog, id)
    }

    /// Dismiss the bottom sheet / clear explicit focus.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The effective focus given the current route.
    pub fn effective_selection<'a>(&'a self, queue: &'a PlanQueue) -> Option<&'a str> {
        self.selection.effective_id(queue)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{build_plan, PlanIntent};
    use gymkit_core::data::Catalog;

    #[test]
    fn test_opens_on_default_floor_at_identity() {
        let view = MapView::new();
        assert_eq!(view.active_floor(), 2);
        assert_eq!(view.viewport().scale(), 1.0);
    }

    #[test]
    fn test_floor_switch_filters_equipment() {
        let catalog = Catalog::demo_floor();
        let mut view = MapView::new();
        assert_eq!(view.visible_equipment(&catalog).len(), 22);
        assert_eq!(view.visible_zones().len(), 6);

        view.set_floor(3);
        assert!(view.visible_equipment(&catalog).is_empty());
        assert!(view.visible_zones().is_empty());
    }

    #[test]
    fn test_drag_suppresses_tap() {
        let catalog = Catalog::demo_floor();
        let mut view = MapView::new();

        view.pointer_down(10.0, 10.0);
        view.pointer_move(60.0, 10.0);
        assert_eq!(view.pointer_up(), GestureOutcome::Drag);
        // Presentation layer would not call select_equipment here
        assert_eq!(view.selection().selected_id(), None);

        view.pointer_down(10.0, 10.0);
        view.pointer_move(12.0, 11.0);
        assert_eq!(view.pointer_up(), GestureOutcome::Tap);
        assert!(view.select_equipment(&catalog, "b2"));
        assert_eq!(view.selection().selected_id(), Some("b2"));
    }

    #[test]
    fn test_descriptors_mark_single_next() {
        let catalog = Catalog::demo_floor();
        let queue = build_plan(PlanIntent::Legs, &catalog);
        let view = MapView::new();
        let descriptors = view.node_descriptors(&catalog, &queue);
        let badges = descriptors
            .iter()
            .filter(|(_, d)| d.next_badge)
            .map(|(e, _)| e.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(badges, vec!["t1"]);
    }
}
