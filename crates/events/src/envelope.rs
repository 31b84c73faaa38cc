use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::event::Topic;

/// Envelope wrapping a published payload with delivery metadata.
///
/// Handlers receive the envelope by reference. The payload belongs to the
/// channel for the duration of the publish call; handlers that keep it must
/// clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    topic: Topic,

    /// Monotonically increasing position on the channel that published it.
    sequence_number: u64,

    occurred_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        topic: Topic,
        sequence_number: u64,
        occurred_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            topic,
            sequence_number,
            occurred_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
