//! The inbound holding queue.

use atc_aircraft::Aircraft;
use atc_core::SimTime;

use crate::{AdmissionQueue, HoldingPolicy};

/// Priority queue of inbound aircraft awaiting a landing-capable runway.
pub type HoldingQueue = AdmissionQueue<HoldingPolicy>;

impl AdmissionQueue<HoldingPolicy> {
    /// Burn fuel for every holding aircraft, then remove and return those
    /// left at or below `diversion_threshold`.
    ///
    /// Each aircraft burns `burn_per_min × min(tick_size_min, minutes held)`,
    /// so one admitted partway through the tick only pays for the minutes it
    /// actually held.  Returned aircraft are in priority order.
    pub fn burn_and_divert(
        &mut self,
        now:                 SimTime,
        tick_size_min:       u32,
        burn_per_min:        u32,
        diversion_threshold: u32,
    ) -> Vec<Aircraft> {
        if burn_per_min > 0 {
            self.update_each(|aircraft| {
                let held = aircraft.queued_minutes(now).min(tick_size_min as u64);
                let burn = (held * burn_per_min as u64).min(u32::MAX as u64) as u32;
                aircraft.burn_fuel(burn);
            });
        }
        self.drain_where(|aircraft| aircraft.fuel_remaining() <= diversion_threshold)
    }
}
