use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of wall-clock time for timestamp properties.
///
/// Every "set to current time" operation reads the clock exactly once, so a
/// deterministic implementation makes object construction reproducible.
pub trait Clock {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system's wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step after every read.
///
/// Two consecutive reads never return the same instant, which makes it easy
/// to observe whether a value was copied or read from the clock again. Once
/// the next step would overflow, the clock stays at the last instant.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.next.get();
        self.next
            .set(current.checked_add_signed(self.step).unwrap_or(current));
        current
    }
}
