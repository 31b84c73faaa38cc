//! In-memory event channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::bus::{EventChannel, Handler};
use crate::envelope::EventEnvelope;
use crate::event::Topic;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The handler registry lock was poisoned.
    #[error("channel registry lock poisoned")]
    Poisoned,
}

struct Registration<M> {
    topic: Topic,
    handler: Handler<M>,
}

/// In-memory pub/sub channel.
///
/// - No IO / no async
/// - Handlers run on the publishing thread, in registration order
/// - The registry lock is released before handlers run, so a handler may
///   publish on the same channel
pub struct InMemoryChannel<M> {
    registry: Mutex<Vec<Registration<M>>>,
    sequence: AtomicU64,
}

impl<M> InMemoryChannel<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers registered for `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.topic == topic)
            .count()
    }

    fn handlers_for(&self, topic: Topic) -> Result<Vec<Handler<M>>, ChannelError> {
        let reg = self.registry.lock().map_err(|_| ChannelError::Poisoned)?;
        Ok(reg
            .iter()
            .filter(|r| r.topic == topic)
            .map(|r| Arc::clone(&r.handler))
            .collect())
    }
}

impl<M> Default for InMemoryChannel<M> {
    fn default() -> Self {
        Self {
            registry: Mutex::new(Vec::new()),
            sequence: AtomicU64::new(0),
        }
    }
}

impl<M> core::fmt::Debug for InMemoryChannel<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let registered = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("InMemoryChannel")
            .field("registered", &registered)
            .field("sequence", &self.sequence.load(Ordering::Relaxed))
            .finish()
    }
}

impl<M> EventChannel<M> for InMemoryChannel<M>
where
    M: Send + 'static,
{
    type Error = ChannelError;

    fn publish(&self, topic: Topic, message: M) -> Result<usize, Self::Error> {
        let handlers = self.handlers_for(topic)?;
        let sequence_number = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let envelope = EventEnvelope::new(Uuid::now_v7(), topic, sequence_number, Utc::now(), message);

        for handler in &handlers {
            handler(&envelope);
        }

        tracing::debug!(
            %topic,
            sequence_number,
            event_id = %envelope.event_id(),
            delivered = handlers.len(),
            "published"
        );
        Ok(handlers.len())
    }

    fn subscribe(&self, topic: Topic, handler: Handler<M>) -> Result<(), Self::Error> {
        let mut reg = self.registry.lock().map_err(|_| ChannelError::Poisoned)?;
        reg.push(Registration { topic, handler });
        tracing::debug!(%topic, registered = reg.len(), "subscribed");
        Ok(())
    }
}
