//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or
//! replayed. Payloads carry equipment ids rather than whole records where
//! the receiver can resolve them against the catalog.

use serde::{Deserialize, Serialize};

use crate::data::{EquipmentRecord, Mode};

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Session state machine events
    Session(SessionEvent),
    /// Workout plan / queue events
    Plan(PlanEvent),
    /// Facility map events
    Map(MapEvent),
    /// Scan gate lifecycle events
    Scan(ScanEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Session(_) => EventCategory::Session,
            AppEvent::Plan(_) => EventCategory::Plan,
            AppEvent::Map(_) => EventCategory::Map,
            AppEvent::Scan(_) => EventCategory::Scan,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Session(e) => e.description(),
            AppEvent::Plan(e) => e.description(),
            AppEvent::Map(e) => e.description(),
            AppEvent::Scan(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Session state machine events.
    Session,
    /// Workout plan / queue events.
    Plan,
    /// Facility map events.
    Map,
    /// Scan gate lifecycle events.
    Scan,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Session => write!(f, "Session"),
            EventCategory::Plan => write!(f, "Plan"),
            EventCategory::Map => write!(f, "Map"),
            EventCategory::Scan => write!(f, "Scan"),
        }
    }
}

/// Session state machine events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The top-level mode changed.
    ModeChanged {
        /// The new mode.
        mode: Mode,
    },
    /// The equipment being trained changed.
    ActiveEquipmentChanged {
        /// The active equipment, or `None` when training ended.
        equipment: Option<EquipmentRecord>,
    },
    /// A completed exercise was appended to the session history.
    HistoryAppended {
        /// The equipment that was completed.
        equipment: EquipmentRecord,
    },
    /// One second of training elapsed.
    TimerTick {
        /// Seconds elapsed since training started.
        seconds: u64,
    },
}

impl SessionEvent {
    fn description(&self) -> String {
        match self {
            SessionEvent::ModeChanged { mode } => format!("Mode: {}", mode),
            SessionEvent::ActiveEquipmentChanged { equipment } => match equipment {
                Some(e) => format!("Active: {}", e.name),
                None => "Active: none".to_string(),
            },
            SessionEvent::HistoryAppended { equipment } => {
                format!("Completed: {}", equipment.name)
            }
            SessionEvent::TimerTick { seconds } => format!("Tick: {}s", seconds),
        }
    }
}

/// Workout plan events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlanEvent {
    /// The plan queue changed (built, advanced, or cleared).
    QueueChanged {
        /// Remaining equipment ids, head first.
        ids: Vec<String>,
    },
}

impl PlanEvent {
    fn description(&self) -> String {
        match self {
            PlanEvent::QueueChanged { ids } => format!("Queue: [{}]", ids.join(", ")),
        }
    }
}

/// Facility map events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MapEvent {
    /// Map focus moved to another equipment (or was cleared).
    SelectionChanged {
        /// The selected equipment id, if any.
        id: Option<String>,
    },
    /// The visible floor changed.
    FloorChanged {
        /// The new floor number.
        floor: i32,
    },
    /// The map zoom level changed.
    ZoomChanged {
        /// Zoom scale (1.0 = 100%).
        scale: f32,
    },
}

impl MapEvent {
    fn description(&self) -> String {
        match self {
            MapEvent::SelectionChanged { id } => match id {
                Some(id) => format!("Selected: {}", id),
                None => "Selected: none".to_string(),
            },
            MapEvent::FloorChanged { floor } => format!("Floor: {}F", floor),
            MapEvent::ZoomChanged { scale } => format!("Zoom: {:.0}%", scale * 100.0),
        }
    }
}

/// Scan gate lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// A scan was initiated.
    Started {
        /// Target equipment id, or `None` for a blind scan.
        target: Option<String>,
    },
    /// The scan resolved successfully.
    Succeeded {
        /// The equipment id the scan resolved to.
        equipment_id: String,
    },
    /// The scan was cancelled by the user.
    Cancelled,
}

impl ScanEvent {
    fn description(&self) -> String {
        match self {
            ScanEvent::Started { target } => match target {
                Some(id) => format!("Scan started: {}", id),
                None => "Scan started: blind".to_string(),
            },
            ScanEvent::Succeeded { equipment_id } => format!("Scan ok: {}", equipment_id),
            ScanEvent::Cancelled => "Scan cancelled".to_string(),
        }
    }
}
