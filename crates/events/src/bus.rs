//! Event publishing/subscription abstraction (mechanics only).
//!
//! The channel pattern here is a **synchronous callback registry**:
//!
//! - `subscribe(topic, handler)` registers a handler for the lifetime of the
//!   channel. There is no unsubscribe.
//! - `publish(topic, payload)` invokes every handler registered for `topic`,
//!   in registration order, before returning.
//!
//! ```text
//! ReviewForm ──publish("review-submitted")──▶ Channel ──▶ ProductCard handler
//! ```
//!
//! Producers and consumers never reference each other; they only share the
//! channel instance they were given at construction.

use std::sync::Arc;

use crate::envelope::EventEnvelope;
use crate::event::{Event, Topic};

/// A registered subscriber callback.
///
/// Handlers get the envelope by reference and must not assume the payload
/// outlives the call.
pub type Handler<M> = Arc<dyn Fn(&EventEnvelope<M>) + Send + Sync>;

/// Topic-addressed publish/subscribe channel.
///
/// ## Usage Pattern
///
/// ```ignore
/// let channel: Arc<InMemoryChannel<Review>> = Arc::new(InMemoryChannel::new());
/// channel.subscribe(REVIEW_SUBMITTED, Arc::new(|env| println!("{:?}", env.payload())))?;
/// channel.publish(REVIEW_SUBMITTED, review)?;
/// ```
///
/// ## Delivery Guarantees
///
/// - Synchronous: every handler has run when `publish` returns.
/// - Ordered: handlers run in registration order.
/// - Exactly once per handler per publish; no retries, no buffering. A
///   message published while nobody listens is dropped.
pub trait EventChannel<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Deliver `message` to every handler registered for `topic`.
    ///
    /// Returns the number of handlers invoked.
    fn publish(&self, topic: Topic, message: M) -> Result<usize, Self::Error>;

    /// Register `handler` for `topic` for the lifetime of the channel.
    fn subscribe(&self, topic: Topic, handler: Handler<M>) -> Result<(), Self::Error>;

    /// Publish an event under its own topic.
    fn emit(&self, event: M) -> Result<usize, Self::Error>
    where
        M: Event,
    {
        let topic = event.topic();
        self.publish(topic, event)
    }
}

impl<M, B> EventChannel<M> for Arc<B>
where
    B: EventChannel<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, topic: Topic, message: M) -> Result<usize, Self::Error> {
        (**self).publish(topic, message)
    }

    fn subscribe(&self, topic: Topic, handler: Handler<M>) -> Result<(), Self::Error> {
        (**self).subscribe(topic, handler)
    }
}
