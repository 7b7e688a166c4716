//! Per-equipment render descriptors.
//!
//! The map renders each equipment as a node whose outline depends on its
//! category and whose emphasis depends on route/selection/status state.
//! Both classifications live here as plain data so the presentation layer
//! only maps them to visuals; it never re-derives them.

use serde::{Deserialize, Serialize};

use gymkit_core::data::{EquipmentCategory, EquipmentRecord, EquipmentStatus};

use crate::plan::{Highlight, PlanQueue};

/// Outline/footprint class of a map node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeShape {
    /// Wide horizontal deck (treadmills).
    WideDeck,
    /// Square rack frame (dumbbell and squat racks).
    RackFrame,
    /// Tall narrow pad (benches).
    BenchPad,
    /// Boxy station (multi-station machines).
    StationBox,
    /// Low flat strip (stretch mats).
    MatStrip,
    /// Generic tile (other cardio).
    Tile,
}

impl From<EquipmentCategory> for NodeShape {
    fn from(category: EquipmentCategory) -> Self {
        match category {
            EquipmentCategory::Treadmill => NodeShape::WideDeck,
            EquipmentCategory::FreeWeightRack => NodeShape::RackFrame,
            EquipmentCategory::Bench => NodeShape::BenchPad,
            EquipmentCategory::MultiStation => NodeShape::StationBox,
            EquipmentCategory::StretchMat => NodeShape::MatStrip,
            EquipmentCategory::CardioOther => NodeShape::Tile,
        }
    }
}

/// Visual emphasis of a node, strongest claim first.
///
/// Route state outranks operating status: the next target and queued
/// stops keep their route emphasis even while busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    /// Head of the plan queue.
    NextTarget,
    /// Queued behind the head.
    Queued,
    /// Free to use.
    Available,
    /// Occupied.
    Busy,
    /// Out of service.
    Maintenance,
}

/// Everything the presentation layer needs to draw one equipment node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Outline class from the equipment category.
    pub shape: NodeShape,
    /// Emphasis from route/status classification.
    pub emphasis: Emphasis,
    /// Whether the node holds the map focus.
    pub selected: bool,
    /// Whether to show the "NEXT" badge above the node.
    pub next_badge: bool,
}

/// Classify one equipment record against the current route and focus.
pub fn node_descriptor(
    equipment: &EquipmentRecord,
    queue: &PlanQueue,
    selected_id: Option<&str>,
) -> NodeDescriptor {
    let emphasis = match queue.highlight(&equipment.id) {
        Highlight::Next => Emphasis::NextTarget,
        Highlight::Queued => Emphasis::Queued,
        Highlight::None => match equipment.status {
            EquipmentStatus::Available => Emphasis::Available,
            EquipmentStatus::Busy => Emphasis::Busy,
            EquipmentStatus::Maintenance => Emphasis::Maintenance,
        },
    };
    NodeDescriptor {
        shape: equipment.category.into(),
        emphasis,
        selected: selected_id == Some(equipment.id.as_str()),
        next_badge: emphasis == Emphasis::NextTarget,
    }
}
