//! Workout plan queue.
//!
//! A plan is an ordered route of up to three equipment records matched to
//! a muscle-group intent. The head of the queue is the single "NEXT"
//! target; everything else queued renders in a distinct state. Routing is
//! a deliberately simple priority filter over catalog order, not a
//! shortest-path planner.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use gymkit_core::data::{Catalog, EquipmentCategory, EquipmentRecord};

/// Maximum number of stops in a planned route.
const PLAN_LENGTH: usize = 3;

/// Equipment ids making up the fallback mixed route.
const FALLBACK_IDS: [&str; 3] = ["t1", "l1", "b1"];

/// Muscle-group intent chosen on the plan screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanIntent {
    /// Chest day: benches and chest-labelled machines.
    Chest,
    /// Back day.
    Back,
    /// Leg day.
    Legs,
    /// Mixed full-body route (also the fallback for unrecognized intents).
    FullBody,
}

impl PlanIntent {
    /// Parse a free-form intent label; anything unrecognized maps to
    /// `FullBody`.
    pub fn parse(label: &str) -> Self {
        match label {
            "Chest" => PlanIntent::Chest,
            "Back" => PlanIntent::Back,
            "Legs" => PlanIntent::Legs,
            _ => PlanIntent::FullBody,
        }
    }
}

impl std::fmt::Display for PlanIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanIntent::Chest => write!(f, "Chest"),
            PlanIntent::Back => write!(f, "Back"),
            PlanIntent::Legs => write!(f, "Legs"),
            PlanIntent::FullBody => write!(f, "Full Body"),
        }
    }
}

/// Classification of one equipment id against the queue.
///
/// The three states are mutually exclusive: the head is `Next`, any other
/// queued entry is `Queued`, everything else is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Head of the queue, the highlighted "NEXT" target.
    Next,
    /// Queued behind the head.
    Queued,
    /// Not part of the plan.
    None,
}

/// Ordered route of equipment for the current session.
#[derive(Debug, Clone, Default)]
pub struct PlanQueue {
    entries: VecDeque<EquipmentRecord>,
}

impl PlanQueue {
    /// Create an empty queue (free/unplanned mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue from records, head first.
    pub fn from_records(records: Vec<EquipmentRecord>) -> Self {
        Self {
            entries: records.into(),
        }
    }

    /// The next target, if the queue is non-empty.
    pub fn head(&self) -> Option<&EquipmentRecord> {
        self.entries.front()
    }

    /// Number of remaining stops.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the route is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the remaining stops, head first.
    pub fn iter(&self) -> impl Iterator<Item = &EquipmentRecord> {
        self.entries.iter()
    }

    /// Remaining equipment ids, head first.
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    /// Remove all stops.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove the completed equipment from the route.
    ///
    /// Removes at most one entry. Returns whether anything was removed;
    /// an absent id is a no-op, which covers training equipment outside
    /// the planned route.
    pub fn advance(&mut self, completed_id: &str) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == completed_id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Whether the id is the highlighted next target.
    pub fn is_next_target(&self, id: &str) -> bool {
        self.head().is_some_and(|e| e.id == id)
    }

    /// Whether the id appears anywhere in the route.
    pub fn is_queued(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Classify an id against the queue.
    pub fn highlight(&self, id: &str) -> Highlight {
        if self.is_next_target(id) {
            Highlight::Next
        } else if self.is_queued(id) {
            Highlight::Queued
        } else {
            Highlight::None
        }
    }
}

/// Build a recommended route for the given intent.
///
/// Matching is a priority filter over the catalog's muscle/category
/// attributes, truncated to the first three matches in catalog order.
/// Unrecognized intents (and `FullBody`) fall back to a fixed mixed
/// triple; if the catalog does not carry the fallback ids, the first
/// three records stand in.
pub fn build_plan(intent: PlanIntent, catalog: &Catalog) -> PlanQueue {
    let matches: Vec<EquipmentRecord> = match intent {
        PlanIntent::Chest => catalog
            .list_all()
            .iter()
            .filter(|e| e.category == EquipmentCategory::Bench || e.targets_muscle("Chest"))
            .cloned()
            .collect(),
        PlanIntent::Back => catalog
            .list_all()
            .iter()
            .filter(|e| e.targets_muscle("Back") || e.targets_muscle("Legs/Back"))
            .cloned()
            .collect(),
        PlanIntent::Legs => catalog
            .list_all()
            .iter()
            .filter(|e| {
                e.targets_muscle("Legs/Cardio")
                    || e.targets_muscle("Quads")
                    || e.targets_muscle("Legs/Back")
            })
            .cloned()
            .collect(),
        PlanIntent::FullBody => {
            let fallback: Vec<EquipmentRecord> = FALLBACK_IDS
                .iter()
                .filter_map(|id| catalog.get(id))
                .cloned()
                .collect();
            if fallback.is_empty() {
                catalog.list_all().iter().take(PLAN_LENGTH).cloned().collect()
            } else {
                fallback
            }
        }
    };

    let route: Vec<EquipmentRecord> = matches.into_iter().take(PLAN_LENGTH).collect();
    tracing::debug!(
        intent = %intent,
        stops = route.len(),
        "Built workout route"
    );
    PlanQueue::from_records(route)
}
