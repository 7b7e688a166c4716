//! # GymKit
//!
//! A smart-gym companion core: a user plans a workout, navigates the
//! facility map, scans equipment to start timed exercise blocks, and
//! reviews a summary. This crate integrates the workspace and owns the
//! process-level concerns (logging, version info); all domain logic
//! lives in the member crates.
//!
//! ## Architecture
//!
//! GymKit is organized as a workspace with multiple crates:
//!
//! 1. **gymkit-core** - Equipment catalog, session mode, occupancy model,
//!    errors, event bus
//! 2. **gymkit-map** - Facility map: viewport, plan queue, selection,
//!    zones, render descriptors
//! 3. **gymkit-session** - Session orchestrator, scan gate, set log,
//!    training clock
//! 4. **gymkit** - Integration crate and demo binary
//!
//! The core is headless: a presentation layer sends commands to the
//! [`SessionOrchestrator`] and subscribes to the [`EventBus`]; nothing
//! here renders, persists, or touches the network.

pub use gymkit_core::data;

pub use gymkit_core::{
    AppEvent, Catalog, CrowdFeed, EquipmentCategory, EquipmentRecord, EquipmentStatus, Error,
    EventBus, EventBusConfig, EventCategory, EventFilter, MapEvent, Mode, OccupancyModel,
    PlanEvent, RandomWalkFeed, Result, ScanEvent, SessionEvent, SubscriptionId,
};

pub use gymkit_map::{
    build_plan, floor_zones, node_descriptor, Emphasis, FloorZone, GestureOutcome, Highlight,
    MapView, NodeDescriptor, NodeShape, PlanIntent, PlanQueue, SelectionModel, Viewport, ZoneKind,
    ZoneRect, MAX_SCALE, MIN_SCALE, ZOOM_STEP,
};

pub use gymkit_session::{
    EquipmentResolver, FirstAvailableResolver, ScanCancel, ScanGate, ScanOutcome,
    SessionOrchestrator, SessionSummary, SetLog, SimulatedGate, Ticker, TrainingClock, WorkoutSet,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
