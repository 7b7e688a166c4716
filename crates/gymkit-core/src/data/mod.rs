//! Data models for GymKit
//!
//! Equipment records, the facility catalog, the session mode enumeration,
//! and the floor occupancy model.

mod catalog;
mod equipment;
mod occupancy;
mod session;

pub use catalog::Catalog;
pub use equipment::{EquipmentCategory, EquipmentRecord, EquipmentStatus};
pub use occupancy::{CrowdFeed, OccupancyModel, RandomWalkFeed};
pub use session::Mode;
