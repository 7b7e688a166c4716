//! Facility equipment catalog.
//!
//! The catalog is the read-only supplier of equipment records for a
//! facility. It is populated once at startup and queried by the map and
//! session layers; queries are pure and never fail — an empty result is a
//! valid answer, not an error.

use super::equipment::{EquipmentCategory, EquipmentRecord, EquipmentStatus};

/// Read-only set of equipment records for one facility.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    equipment: Vec<EquipmentRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a pre-populated record set.
    pub fn from_records(equipment: Vec<EquipmentRecord>) -> Self {
        Self { equipment }
    }

    /// All records, in catalog order.
    pub fn list_all(&self) -> &[EquipmentRecord] {
        &self.equipment
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&EquipmentRecord> {
        self.equipment.iter().find(|e| e.id == id)
    }

    /// Records standing on the given floor, in catalog order.
    pub fn filter_by_floor(&self, floor: i32) -> Vec<&EquipmentRecord> {
        self.equipment.iter().filter(|e| e.floor == floor).collect()
    }

    /// Records carrying the given target-muscle label, in catalog order.
    pub fn filter_by_muscle_group(&self, group: &str) -> Vec<&EquipmentRecord> {
        self.equipment
            .iter()
            .filter(|e| e.targets_muscle(group))
            .collect()
    }

    /// The first available record in catalog order, if any.
    pub fn first_available(&self) -> Option<&EquipmentRecord> {
        self.equipment.iter().find(|e| e.is_available())
    }

    /// Built-in demo facility: the second-floor free-weight area.
    ///
    /// Twenty-two pieces across six zones. Used by the demo binary and by
    /// tests that need a realistic floor layout.
    pub fn demo_floor() -> Self {
        use EquipmentCategory::*;
        use EquipmentStatus::*;

        let rec = EquipmentRecord::new;
        Self::from_records(vec![
            // Left column: treadmills
            rec("t1", "Treadmill 01", Treadmill, Available, 16.0, 10.0, 2, Some("Legs/Cardio")),
            rec("t2", "Treadmill 02", Treadmill, Busy, 16.0, 19.0, 2, Some("Legs/Cardio")),
            rec("t3", "Treadmill 03", Treadmill, Available, 16.0, 28.0, 2, Some("Legs/Cardio")),
            rec("t4", "Treadmill 04", Treadmill, Available, 16.0, 37.0, 2, Some("Legs/Cardio")),
            rec("t5", "Treadmill 05", Treadmill, Maintenance, 16.0, 46.0, 2, Some("Legs/Cardio")),
            rec("t6", "Treadmill 06", Treadmill, Busy, 16.0, 55.0, 2, Some("Legs/Cardio")),
            // Bottom left: leg machine
            rec("l1", "Leg Press", MultiStation, Available, 16.0, 72.0, 2, Some("Quads")),
            // Top center: dumbbells and benches
            rec("db_rack", "Dumbbell Rack", FreeWeightRack, Available, 47.0, 9.0, 2, Some("Full Body")),
            rec("b1", "Bench Press 1", Bench, Busy, 36.0, 20.0, 2, Some("Chest")),
            rec("b2", "Bench Press 2", Bench, Available, 44.0, 20.0, 2, Some("Chest")),
            rec("b3", "Bench Press 3", Bench, Available, 52.0, 20.0, 2, Some("Chest")),
            rec("b4", "Bench Press 4", Bench, Busy, 60.0, 20.0, 2, Some("Chest")),
            // Top right: power racks
            rec("r1", "Squat Rack A", FreeWeightRack, Busy, 81.0, 15.0, 2, Some("Legs/Back")),
            rec("r2", "Squat Rack B", FreeWeightRack, Available, 81.0, 32.0, 2, Some("Legs/Back")),
            // Center/right: machines
            rec("m_small", "Bicep Curl", MultiStation, Available, 55.0, 45.0, 2, Some("Biceps")),
            rec("m_center", "Seated Row", MultiStation, Available, 55.0, 62.0, 2, Some("Back")),
            rec("m_r1", "Shoulder Press", MultiStation, Available, 85.0, 50.0, 2, Some("Shoulders")),
            rec("m_r2", "Pec Fly", MultiStation, Busy, 85.0, 65.0, 2, Some("Chest")),
            rec("m_r3", "Ab Crunch", MultiStation, Available, 85.0, 80.0, 2, Some("Abs")),
            // Bottom right: stretching
            rec("s1", "Yoga Mat A", StretchMat, Available, 50.0, 90.0, 2, Some("Stretch")),
            rec("s2", "Yoga Mat B", StretchMat, Available, 65.0, 90.0, 2, Some("Stretch")),
            rec("s3", "Yoga Mat C", StretchMat, Busy, 80.0, 90.0, 2, Some("Stretch")),
        ])
    }
}
