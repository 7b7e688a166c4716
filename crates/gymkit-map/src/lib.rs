//! # GymKit Map
//!
//! Interactive facility map logic: the pan/zoom viewport, the workout
//! plan queue with next-target highlighting, equipment selection, and the
//! per-node render descriptors consumed by a presentation layer.

pub mod map_view;
pub mod node;
pub mod plan;
pub mod selection;
pub mod viewport;
pub mod zones;

pub use map_view::MapView;
pub use node::{node_descriptor, Emphasis, NodeDescriptor, NodeShape};
pub use plan::{build_plan, Highlight, PlanIntent, PlanQueue};
pub use selection::SelectionModel;
pub use viewport::{GestureOutcome, Viewport, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
pub use zones::{floor_zones, FloorZone, ZoneKind, ZoneRect};
