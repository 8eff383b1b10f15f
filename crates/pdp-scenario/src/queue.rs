//! `EventQueue` — the run-local view of a scenario's events.
//!
//! # Ordering
//!
//! Events come out in non-decreasing `time`.  Events that share a tick come
//! out in the order they were inserted (FIFO within a tick): the sort used
//! to build the queue is stable, and the queue itself is a plain
//! `VecDeque` drained from the front.
//!
//! Each call to [`Scenario::as_queue`][crate::Scenario::as_queue] returns a
//! fresh queue that owns its own copy of the events, so consuming one queue
//! never affects another queue or the scenario.

use std::collections::VecDeque;

use pdp_core::Tick;

use crate::TimedEvent;

/// A consumable, time-ordered queue of [`TimedEvent`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue {
    inner: VecDeque<TimedEvent>,
}

impl EventQueue {
    /// Build a queue from events in any order.
    ///
    /// Events are stably sorted by time, so ties keep their relative order.
    pub fn new<I: IntoIterator<Item = TimedEvent>>(events: I) -> Self {
        let mut events: Vec<TimedEvent> = events.into_iter().collect();
        events.sort_by_key(|e| e.time);
        Self { inner: events.into() }
    }

    /// Build a queue from a slice that is already time-ordered.
    pub(crate) fn from_sorted(events: &[TimedEvent]) -> Self {
        debug_assert!(events.windows(2).all(|w| w[0].time <= w[1].time));
        Self { inner: events.iter().copied().collect() }
    }

    /// Remove and return the next event.
    pub fn pop(&mut self) -> Option<TimedEvent> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&TimedEvent> {
        self.inner.front()
    }

    /// Time of the next event, or `None` if the queue is exhausted.
    pub fn next_time(&self) -> Option<Tick> {
        self.inner.front().map(|e| e.time)
    }

    /// Remove and return every event with `time <= now`, in queue order.
    ///
    /// Returns an empty `Vec` if nothing is due (no allocation).
    pub fn pop_due(&mut self, now: Tick) -> Vec<TimedEvent> {
        let due = self.inner.partition_point(|e| e.time <= now);
        self.inner.drain(..due).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Iterator for EventQueue {
    type Item = TimedEvent;

    fn next(&mut self) -> Option<TimedEvent> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl ExactSizeIterator for EventQueue {}
