//! The outbound takeoff queue.

use atc_aircraft::Aircraft;
use atc_core::SimTime;

use crate::{AdmissionQueue, TakeoffPolicy};

/// Priority queue of outbound aircraft awaiting a takeoff-capable runway.
pub type TakeoffQueue = AdmissionQueue<TakeoffPolicy>;

impl AdmissionQueue<TakeoffPolicy> {
    /// Remove and return every aircraft that has waited strictly longer than
    /// `max_wait_min` as of `now`, in priority order.
    pub fn cancel_overdue(&mut self, now: SimTime, max_wait_min: u32) -> Vec<Aircraft> {
        self.drain_where(|aircraft| aircraft.queued_minutes(now) > max_wait_min as u64)
    }
}
