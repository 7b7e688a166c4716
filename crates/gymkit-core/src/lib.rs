//! # GymKit Core
//!
//! Core types and utilities for the GymKit smart-gym companion.
//! Provides the equipment data model, the facility catalog, the session
//! mode enumeration, and the application event bus.

pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{
    Catalog, CrowdFeed, EquipmentCategory, EquipmentRecord, EquipmentStatus, Mode, OccupancyModel,
    RandomWalkFeed,
};

pub use error::{Error, Result};

pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventCategory, EventFilter, MapEvent, PlanEvent,
    ScanEvent, SessionEvent, SubscriptionId,
};
