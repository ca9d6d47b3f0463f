//! `PendingBuffer`: aircraft created but not yet due to join a queue.
//!
//! Keyed by jittered spawn time, so each tick only the due prefix is
//! touched.  Within one spawn time aircraft keep creation order, which for a
//! single direction is id order.

use std::collections::BTreeMap;

use atc_aircraft::Aircraft;
use atc_core::SimTime;

#[derive(Default)]
pub struct PendingBuffer {
    inner: BTreeMap<SimTime, Vec<Aircraft>>,
    /// Cached total aircraft count for O(1) `len()`.
    total: usize,
}

impl PendingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `aircraft` until the clock reaches its spawn time.
    pub fn push(&mut self, aircraft: Aircraft) {
        self.inner.entry(aircraft.spawn_time()).or_default().push(aircraft);
        self.total += 1;
    }

    /// Remove and return every aircraft with `spawn_time <= now`, ordered by
    /// spawn time.
    pub fn drain_due(&mut self, now: SimTime) -> Vec<Aircraft> {
        let later = self.inner.split_off(&(now + 1));
        let due = std::mem::replace(&mut self.inner, later);
        let aircraft: Vec<Aircraft> = due.into_values().flatten().collect();
        self.total -= aircraft.len();
        aircraft
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.inner.values().flatten()
    }
}
