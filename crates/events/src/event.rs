use core::fmt;

/// Name of a channel topic (e.g. `"review-submitted"`).
///
/// Topics are compile-time constants; handlers only receive messages published
/// under the exact topic they registered for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Topic(&'static str);

impl Topic {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A message carried over an event channel.
///
/// Events are **immutable** (treat them as facts) and bound to exactly one
/// **topic**.
pub trait Event: Clone + fmt::Debug + Send + Sync + 'static {
    /// Topic this event is published under.
    fn topic(&self) -> Topic;
}
