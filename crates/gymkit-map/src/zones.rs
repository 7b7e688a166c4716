//! Facility floor-plan zones.
//!
//! Named rectangular areas of the floor plan (cardio strip, dumbbell
//! area, ...). Like equipment positions, zone rectangles are percentages
//! of the floor bounds. Zones classify floor space; how they are tinted
//! is the presentation layer's business.

use serde::{Deserialize, Serialize};

/// What a floor zone is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Treadmills and other cardio decks.
    Cardio,
    /// Leg-focused machines.
    LegMachines,
    /// Dumbbell racks and benches.
    FreeWeights,
    /// Squat/power racks.
    Racks,
    /// General resistance machines.
    Machines,
    /// Mats and stretching space.
    Stretching,
}

/// Zone rectangle in percent of the floor bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    /// Left edge, percent of floor width.
    pub x: f32,
    /// Top edge, percent of floor height.
    pub y: f32,
    /// Width, percent of floor width.
    pub width: f32,
    /// Height, percent of floor height.
    pub height: f32,
}

impl ZoneRect {
    /// Whether a normalized point falls inside the rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// One named area of the facility floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorZone {
    /// Unique zone id.
    pub id: String,
    /// Display label; empty for unlabeled zones.
    pub label: String,
    /// Zone bounds.
    pub rect: ZoneRect,
    /// Zone classification.
    pub kind: ZoneKind,
}

impl FloorZone {
    fn new(id: &str, label: &str, kind: ZoneKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            rect: ZoneRect {
                x,
                y,
                width,
                height,
            },
            kind,
        }
    }
}

/// Floor-plan zones for the given floor.
///
/// Only the second floor carries a zone layout in the demo facility;
/// other floors return an empty set.
pub fn floor_zones(floor: i32) -> Vec<FloorZone> {
    if floor != 2 {
        return Vec::new();
    }
    vec![
        FloorZone::new("z_cardio", "", ZoneKind::Cardio, 5.0, 5.0, 22.0, 55.0),
        FloorZone::new("z_legs", "Leg Machines", ZoneKind::LegMachines, 5.0, 62.0, 22.0, 20.0),
        FloorZone::new("z_dumbbells", "Dumbbells", ZoneKind::FreeWeights, 30.0, 5.0, 35.0, 25.0),
        FloorZone::new("z_racks", "", ZoneKind::Racks, 68.0, 5.0, 27.0, 40.0),
        FloorZone::new("z_machines", "Machines", ZoneKind::Machines, 38.0, 38.0, 57.0, 44.0),
        FloorZone::new("z_stretch", "Stretching", ZoneKind::Stretching, 40.0, 84.0, 55.0, 15.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_second_floor_has_zones() {
        assert_eq!(floor_zones(2).len(), 6);
        assert!(floor_zones(1).is_empty());
        assert!(floor_zones(3).is_empty());
    }

    #[test]
    fn test_zone_containment() {
        let zones = floor_zones(2);
        let cardio = zones.iter().find(|z| z.id == "z_cardio").unwrap();
        // Treadmill column sits inside the cardio strip
        assert!(cardio.rect.contains(16.0, 10.0));
        assert!(!cardio.rect.contains(85.0, 65.0));
    }

    #[test]
    fn test_zones_stay_in_floor_bounds() {
        for zone in floor_zones(2) {
            assert!(zone.rect.x + zone.rect.width <= 100.0, "{}", zone.id);
            assert!(zone.rect.y + zone.rect.height <= 100.0, "{}", zone.id);
        }
    }
}
