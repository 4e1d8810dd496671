use chrono::{DateTime, Utc};
#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of wall-clock timestamps and monotonic instants
pub trait Clock {
    /// Wall-clock time, used for task timestamps
    fn now(&self) -> DateTime<Utc>;
    /// Monotonic time, used for timer deadlines
    fn instant(&self) -> Instant;
}

/// Clock backed by the system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    wall: Rc<Cell<DateTime<Utc>>>,
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            wall: Rc::new(Cell::new(start)),
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
        let step = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.wall.set(self.wall.get() + step);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.wall.get()
    }

    fn instant(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// One-shot cooperative timer, polled from the event loop tick
#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `after` from `now`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true exactly once when the deadline has passed, disarming the timer
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
