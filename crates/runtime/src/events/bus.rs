//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use pet_core::Notification;

use super::types::{ClockEvent, StateEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// User-facing notifications raised by the rules
    Notification,
    /// Pet record changes and chat messages
    State,
    /// Periodic decay and calendar ticks
    Clock,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Notification, Topic::State, Topic::Clock];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Notification(Notification),
    State(StateEvent),
    Clock(ClockEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Notification(_) => Topic::Notification,
            Event::State(_) => Topic::State,
            Event::Clock(_) => Topic::Clock,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels are created up front and never change,
/// so lookups need no locking.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels: HashMap<Topic, broadcast::Sender<Event>> = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        // Every topic is inserted in `with_capacity`.
        &self.channels[&topic]
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::StatKind;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut notifications = bus.subscribe(Topic::Notification);
        let mut clock = bus.subscribe(Topic::Clock);

        bus.publish(Event::Clock(ClockEvent::DayAdvanced { day: 2 }));

        assert!(matches!(
            clock.recv().await,
            Ok(Event::Clock(ClockEvent::DayAdvanced { day: 2 }))
        ));
        assert!(notifications.try_recv().is_err());

        bus.publish(Event::Notification(Notification::LowStat {
            stat: StatKind::Energy,
            pet_name: "Rex".into(),
        }));
        assert!(matches!(
            notifications.recv().await,
            Ok(Event::Notification(Notification::LowStat { .. }))
        ));
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Clock(ClockEvent::Decayed { amount: 5 }));
    }
}
