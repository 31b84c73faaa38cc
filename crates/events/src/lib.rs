//! `storefront-events` — events, commands and the publish/subscribe channel.
//!
//! The channel is an explicit object: it is constructed once by the
//! composition root and handed to the components that publish or subscribe.
//! There is no process-wide bus.

pub mod bus;
pub mod command;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventChannel, Handler};
pub use command::Command;
pub use envelope::EventEnvelope;
pub use event::{Event, Topic};
pub use handler::execute;
pub use in_memory_bus::{ChannelError, InMemoryChannel};
