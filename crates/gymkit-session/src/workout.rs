//! Set logging and session summary data.
//!
//! While training one equipment the user checks off sets, each with a
//! rep count, a working weight and a rest interval. The log feeds the
//! volume figure on the session summary.

use serde::{Deserialize, Serialize};

/// Reps a fresh log starts with.
const DEFAULT_REPS: u32 = 10;
/// Working weight a fresh log starts with, in kilograms.
const DEFAULT_WEIGHT_KG: f32 = 20.0;
/// Rest interval between sets, in seconds.
const DEFAULT_REST_SECS: u32 = 60;
/// Sets a fresh log starts with.
const INITIAL_SETS: usize = 3;

/// One set of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Ordinal within the log, starting at 1.
    pub number: u32,
    /// Repetitions.
    pub reps: u32,
    /// Working weight in kilograms.
    pub weight_kg: f32,
    /// Rest after the set, in seconds.
    pub rest_secs: u32,
    /// Whether the set has been checked off.
    pub completed: bool,
}

impl WorkoutSet {
    /// Volume moved by this set, zero while unchecked.
    pub fn volume_kg(&self) -> f32 {
        if self.completed {
            self.reps as f32 * self.weight_kg
        } else {
            0.0
        }
    }
}

/// Per-equipment set log for the active exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetLog {
    sets: Vec<WorkoutSet>,
}

impl SetLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pre-filled with the standard three working sets.
    pub fn standard() -> Self {
        let mut log = Self::new();
        for _ in 0..INITIAL_SETS {
            log.add_set();
        }
        log
    }

    /// The sets, in order.
    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    /// Number of sets in the log.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of checked-off sets.
    pub fn completed_count(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }

    /// Append a set inheriting the last set's reps and weight.
    pub fn add_set(&mut self) -> &WorkoutSet {
        let (reps, weight_kg) = match self.sets.last() {
            Some(last) => (last.reps, last.weight_kg),
            None => (DEFAULT_REPS, DEFAULT_WEIGHT_KG),
        };
        self.sets.push(WorkoutSet {
            number: self.sets.len() as u32 + 1,
            reps,
            weight_kg,
            rest_secs: DEFAULT_REST_SECS,
            completed: false,
        });
        self.sets.last().unwrap()
    }

    /// Toggle completion of the set with the given ordinal.
    ///
    /// An unknown ordinal is a no-op.
    pub fn toggle(&mut self, number: u32) {
        if let Some(set) = self.sets.iter_mut().find(|s| s.number == number) {
            set.completed = !set.completed;
        }
    }

    /// Total volume of the checked-off sets, in kilograms.
    pub fn completed_volume_kg(&self) -> f32 {
        self.sets.iter().map(WorkoutSet::volume_kg).sum()
    }
}

/// Figures shown on the end-of-session summary screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Total training time in seconds.
    pub duration_secs: u64,
    /// Volume moved across all equipment, in kilograms.
    pub total_volume_kg: f32,
    /// Display names of the equipment trained, in completion order.
    pub equipment_used: Vec<String>,
}

impl SessionSummary {
    /// Duration formatted as `MM:SS`.
    pub fn duration_display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.duration_secs / 60,
            self.duration_secs % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_log_has_three_pending_sets() {
        let log = SetLog::standard();
        assert_eq!(log.len(), 3);
        assert_eq!(log.completed_count(), 0);
        assert_eq!(log.sets()[0].reps, 10);
        assert_eq!(log.sets()[2].number, 3);
    }

    #[test]
    fn test_new_set_inherits_last_reps_and_weight() {
        let mut log = SetLog::new();
        log.add_set();
        log.sets.last_mut().unwrap().reps = 8;
        log.sets.last_mut().unwrap().weight_kg = 42.5;

        let added = log.add_set();
        assert_eq!(added.reps, 8);
        assert_eq!(added.weight_kg, 42.5);
        assert!(!added.completed);
    }

    #[test]
    fn test_toggle_and_volume() {
        let mut log = SetLog::standard();
        assert_eq!(log.completed_volume_kg(), 0.0);

        log.toggle(1);
        log.toggle(3);
        assert_eq!(log.completed_count(), 2);
        // Two sets of 10 reps at 20 kg
        assert_eq!(log.completed_volume_kg(), 400.0);

        log.toggle(1);
        assert_eq!(log.completed_volume_kg(), 200.0);

        // Unknown ordinal is ignored
        log.toggle(99);
        assert_eq!(log.completed_count(), 1);
    }

    #[test]
    fn test_summary_duration_display() {
        let summary = SessionSummary {
            duration_secs: 754,
            total_volume_kg: 1250.0,
            equipment_used: vec!["Bench Press 1".to_string()],
        };
        assert_eq!(summary.duration_display(), "12:34");
    }
}
