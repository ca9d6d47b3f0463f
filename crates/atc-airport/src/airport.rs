//! `Airport`: the two queues plus the runway pool.

use log::debug;

use atc_aircraft::Aircraft;
use atc_core::SimTime;
use atc_queue::{HoldingQueue, TakeoffQueue};

use crate::{AirportResult, Operation, RunwayPool, StatisticsCollector};

/// Composes the holding queue, the takeoff queue and the runway pool, and
/// runs the per-tick assignment algorithm over them.
///
/// The runway occupation time is not stored here: the engine passes its
/// validated `service_time_min` to every assignment call.
pub struct Airport {
    pub runways: RunwayPool,
    pub holding: HoldingQueue,
    pub takeoff: TakeoffQueue,
}

impl Airport {
    pub fn new(runways: RunwayPool) -> Self {
        Self {
            runways,
            holding: HoldingQueue::new(),
            takeoff: TakeoffQueue::new(),
        }
    }

    /// Admit an inbound aircraft to holding, stamped at `at`.
    pub fn handle_inbound(&mut self, aircraft: Aircraft, at: SimTime) -> AirportResult<()> {
        debug!("{} enters holding at {at}", aircraft.id());
        self.holding.enqueue(aircraft, at)?;
        Ok(())
    }

    /// Admit an outbound aircraft to the takeoff queue, stamped at `at`.
    pub fn handle_outbound(&mut self, aircraft: Aircraft, at: SimTime) -> AirportResult<()> {
        debug!("{} joins takeoff queue at {at}", aircraft.id());
        self.takeoff.enqueue(aircraft, at)?;
        Ok(())
    }

    /// Release finished runway occupations (see [`RunwayPool::update_runways`]).
    pub fn update_runways<C: StatisticsCollector>(&mut self, now: SimTime, collector: &mut C) -> usize {
        self.runways.update_runways(now, collector)
    }

    /// Land holding aircraft, best first, while landing runways are free.
    /// Each chosen runway stays busy for `service_min` minutes.  Returns the
    /// number of landings.
    pub fn assign_landing<C: StatisticsCollector>(
        &mut self,
        now:         SimTime,
        service_min: u32,
        collector:   &mut C,
    ) -> AirportResult<usize> {
        let mut landed = 0;
        while !self.holding.is_empty() {
            let Some(slot) = self.runways.first_eligible(Operation::Landing) else {
                break;
            };
            let aircraft = self.holding.pop_best()?;
            let runway = self.runways.occupy(slot, aircraft.id(), now, service_min);
            debug!("{} cleared to land on {} at {now}", aircraft.id(), runway.id());
            collector.record_landing(&aircraft, now);
            landed += 1;
        }
        Ok(landed)
    }

    /// Depart takeoff-queue aircraft, best first, while takeoff runways are
    /// free.  Returns the number of takeoffs.
    pub fn assign_takeoff<C: StatisticsCollector>(
        &mut self,
        now:         SimTime,
        service_min: u32,
        collector:   &mut C,
    ) -> AirportResult<usize> {
        let mut departed = 0;
        while !self.takeoff.is_empty() {
            let Some(slot) = self.runways.first_eligible(Operation::Takeoff) else {
                break;
            };
            let aircraft = self.takeoff.pop_best()?;
            let runway = self.runways.occupy(slot, aircraft.id(), now, service_min);
            debug!("{} cleared for takeoff from {} at {now}", aircraft.id(), runway.id());
            collector.record_takeoff(&aircraft, now);
            departed += 1;
        }
        Ok(departed)
    }
}
