//! Application event bus.
//!
//! The orchestrator and timer publish here; the presentation layer is
//! expected to subscribe. The bus is injected wherever it is needed
//! instead of living in a global, so tests can observe a session in
//! isolation.

mod bus;
mod events;

pub use bus::{EventBus, EventBusConfig, EventFilter, SubscriptionId};
pub use events::{AppEvent, EventCategory, MapEvent, PlanEvent, ScanEvent, SessionEvent};
