//! Equipment record types.
//!
//! An `EquipmentRecord` describes one piece of trainable apparatus on the
//! facility floor: what it is, where it stands, and whether it can be used
//! right now. Records are immutable for the lifetime of a session and are
//! owned by the [`Catalog`](crate::data::Catalog).

use serde::{Deserialize, Serialize};

/// Equipment classification used for plan matching and node rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    /// Treadmill-type cardio deck
    Treadmill,
    /// Free-weight rack (dumbbell racks, squat/power racks)
    FreeWeightRack,
    /// Adjustable bench
    Bench,
    /// Multi-station resistance machine
    MultiStation,
    /// Stretch mat / floor area
    StretchMat,
    /// Other cardio equipment
    CardioOther,
}

impl EquipmentCategory {
    /// Get all equipment categories
    pub fn all() -> &'static [EquipmentCategory] {
        &[
            EquipmentCategory::Treadmill,
            EquipmentCategory::FreeWeightRack,
            EquipmentCategory::Bench,
            EquipmentCategory::MultiStation,
            EquipmentCategory::StretchMat,
            EquipmentCategory::CardioOther,
        ]
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Treadmill => write!(f, "Treadmill"),
            Self::FreeWeightRack => write!(f, "Free-Weight Rack"),
            Self::Bench => write!(f, "Bench"),
            Self::MultiStation => write!(f, "Multi-Station Machine"),
            Self::StretchMat => write!(f, "Stretch Mat"),
            Self::CardioOther => write!(f, "Cardio"),
        }
    }
}

/// Operating status of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    /// Free to use
    Available,
    /// Currently occupied by another member
    Busy,
    /// Out of service
    Maintenance,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Busy => write!(f, "busy"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// One piece of equipment on the facility floor.
///
/// Positions are normalized percentages of the floor-plan bounds, so a
/// record renders the same regardless of map surface size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Unique id, stable across sessions
    pub id: String,
    /// Display name
    pub name: String,
    /// Equipment classification
    pub category: EquipmentCategory,
    /// Current operating status
    pub status: EquipmentStatus,
    /// Horizontal position, percent of floor width [0, 100]
    pub x: f32,
    /// Vertical position, percent of floor height [0, 100]
    pub y: f32,
    /// Floor number the equipment stands on
    pub floor: i32,
    /// Target muscle group label, if the equipment trains a specific one
    pub target_muscle: Option<String>,
}

impl EquipmentRecord {
    /// Create a record with the given identity and placement.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: EquipmentCategory,
        status: EquipmentStatus,
        x: f32,
        y: f32,
        floor: i32,
        target_muscle: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            status,
            x,
            y,
            floor,
            target_muscle: target_muscle.map(str::to_string),
        }
    }

    /// Whether the equipment can be started right now.
    pub fn is_available(&self) -> bool {
        self.status == EquipmentStatus::Available
    }

    /// Whether the record carries the given muscle label.
    pub fn targets_muscle(&self, group: &str) -> bool {
        self.target_muscle.as_deref() == Some(group)
    }
}

impl std::fmt::Display for EquipmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] ({})", self.name, self.id, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        let rec = EquipmentRecord::new(
            "b1",
            "Bench Press 1",
            EquipmentCategory::Bench,
            EquipmentStatus::Available,
            36.0,
            20.0,
            2,
            Some("Chest"),
        );
        assert!(rec.is_available());
        assert!(rec.targets_muscle("Chest"));
        assert!(!rec.targets_muscle("Back"));
    }

    #[test]
    fn test_record_serialization() {
        let rec = EquipmentRecord::new(
            "t1",
            "Treadmill 01",
            EquipmentCategory::Treadmill,
            EquipmentStatus::Maintenance,
            16.0,
            10.0,
            2,
            Some("Legs/Cardio"),
        );
        let json = serde_json::to_string(&rec).expect("Should serialize");
        let parsed: EquipmentRecord = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(parsed, rec);
        assert!(!parsed.is_available());
    }
}
