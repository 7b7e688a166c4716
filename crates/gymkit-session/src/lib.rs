//! # GymKit Session
//!
//! The session orchestration state machine and its collaborators: the
//! asynchronous scan gate, the per-exercise set log, and the training
//! clock/tick source. The orchestrator accepts commands from a
//! presentation layer and publishes state changes on the event bus; it
//! never renders anything itself.

pub mod orchestrator;
pub mod scan;
pub mod timer;
pub mod workout;

pub use orchestrator::SessionOrchestrator;
pub use scan::{
    EquipmentResolver, FirstAvailableResolver, ScanCancel, ScanGate, ScanOutcome, SimulatedGate,
};
pub use timer::{Clock, SystemClock, Ticker, TrainingClock};
pub use workout::{SessionSummary, SetLog, WorkoutSet};
