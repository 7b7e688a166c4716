//! Event Bus implementation.
//!
//! A broadcast channel for async receivers plus a registry of synchronous
//! handlers, filterable by event category.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(AppEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Channel capacity for broadcast.
    pub channel_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Event bus for application-wide event distribution.
///
/// Publishing never fails: events with no listeners are simply dropped,
/// which is the correct behavior for a headless session core.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    handlers: Arc<RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>>,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity);
        Self {
            sender,
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of broadcast receivers the event was delivered
    /// to (synchronous handlers are invoked regardless).
    pub fn publish(&self, event: AppEvent) -> usize {
        tracing::trace!("{}", event.description());

        let handlers = self.handlers.read();
        for (filter, handler) in handlers.values() {
            if filter.matches(&event) {
                handler(event.clone());
            }
        }

        self.sender.send(event).unwrap_or(0)
    }

    /// Subscribe to events with a synchronous handler.
    ///
    /// The handler runs on the publishing thread and should return
    /// quickly to avoid blocking event dispatch.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Get a receiver for polling events from an async task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active synchronous subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Mode;
    use crate::event_bus::events::{PlanEvent, SessionEvent};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);

        // Double unsubscribe should return false
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_event_delivery() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let _id = bus.subscribe(EventFilter::All, move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(AppEvent::Session(SessionEvent::ModeChanged {
            mode: Mode::Map,
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let session_count = Arc::new(AtomicUsize::new(0));
        let plan_count = Arc::new(AtomicUsize::new(0));

        let sc = session_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Session]),
            move |_| {
                sc.fetch_add(1, Ordering::SeqCst);
            },
        );

        let pc = plan_count.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Plan]),
            move |_| {
                pc.fetch_add(1, Ordering::SeqCst);
            },
        );

        bus.publish(AppEvent::Session(SessionEvent::ModeChanged {
            mode: Mode::Training,
        }));
        bus.publish(AppEvent::Plan(PlanEvent::QueueChanged { ids: vec![] }));

        assert_eq!(session_count.load(Ordering::SeqCst), 1);
        assert_eq!(plan_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_without_listeners_is_fine() {
        let bus = EventBus::new();
        let delivered = bus.publish(AppEvent::Session(SessionEvent::TimerTick { seconds: 1 }));
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        bus.publish(AppEvent::Session(SessionEvent::ModeChanged {
            mode: Mode::Summary,
        }));

        match receiver.try_recv() {
            Ok(AppEvent::Session(SessionEvent::ModeChanged { mode })) => {
                assert_eq!(mode, Mode::Summary);
            }
            other => panic!("Wrong event received: {:?}", other),
        }
    }
}
