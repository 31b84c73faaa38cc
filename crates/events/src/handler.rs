/// Execute an aggregate command deterministically (no IO, no async).
///
/// 1. **Decide**: `aggregate.handle(command)` produces events without mutating.
/// 2. **Evolve**: each event is applied in order via `aggregate.apply(event)`.
///
/// The emitted events are returned so callers can log or forward them. A
/// command the aggregate treats as a no-op yields an empty list and leaves
/// state untouched.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: storefront_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Aggregate, AggregateRoot};

    #[derive(Debug, Default)]
    struct Counter {
        total: i64,
        version: u64,
    }

    impl AggregateRoot for Counter {
        fn version(&self) -> u64 {
            self.version
        }
    }

    impl Aggregate for Counter {
        type Command = i64;
        type Event = i64;
        type Error = String;

        fn apply(&mut self, event: &i64) {
            self.total += event;
            self.version += 1;
        }

        fn handle(&self, command: &i64) -> Result<Vec<i64>, String> {
            match *command {
                0 => Ok(vec![]),
                n if n < 0 => Err("negative".to_string()),
                n => Ok(vec![n]),
            }
        }
    }

    #[test]
    fn execute_applies_emitted_events() {
        let mut counter = Counter::default();
        let events = execute(&mut counter, &3).unwrap();
        assert_eq!(events, vec![3]);
        assert_eq!(counter.total, 3);
        assert_eq!(counter.version(), 1);
    }

    #[test]
    fn empty_decision_leaves_state_untouched() {
        let mut counter = Counter::default();
        assert!(execute(&mut counter, &0).unwrap().is_empty());
        assert_eq!(counter.version(), 0);
    }

    #[test]
    fn rejected_command_propagates_error() {
        let mut counter = Counter::default();
        assert!(execute(&mut counter, &-1).is_err());
        assert_eq!(counter.total, 0);
    }
}
