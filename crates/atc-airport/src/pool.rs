//! `RunwayPool`: the set of runways, ordered by id.

use std::collections::BTreeSet;

use atc_aircraft::AircraftId;
use atc_core::{RunwayId, SimTime};

use crate::{AirportError, AirportResult, Operation, Runway, StatisticsCollector};

/// All runways of the airport, kept sorted by id so eligibility queries and
/// assignment are deterministic.
#[derive(Clone, Debug, Default)]
pub struct RunwayPool {
    runways: Vec<Runway>,
}

impl RunwayPool {
    /// Build a pool.  An empty list is allowed: nothing is ever assigned.
    ///
    /// # Errors
    ///
    /// Rejects a runway with an empty capability set and duplicate ids.
    pub fn new(mut runways: Vec<Runway>) -> AirportResult<Self> {
        let mut seen = BTreeSet::new();
        for runway in &runways {
            if runway.mode().is_empty() {
                return Err(AirportError::EmptyMode(runway.id()));
            }
            if !seen.insert(runway.id()) {
                return Err(AirportError::DuplicateRunway(runway.id()));
            }
        }
        runways.sort_by_key(Runway::id);
        Ok(Self { runways })
    }

    /// Release every occupation with `busy_until <= now` and report each
    /// finished span to `collector`.  Returns how many runways were freed.
    pub fn update_runways<C: StatisticsCollector>(&mut self, now: SimTime, collector: &mut C) -> usize {
        let mut freed = 0;
        for runway in &mut self.runways {
            if let Some(duration) = runway.release(now) {
                collector.record_runway_usage(runway, duration);
                freed += 1;
            }
        }
        freed
    }

    /// Free runways capable of `op`, by ascending id.
    pub fn eligible_runways(&self, op: Operation) -> Vec<RunwayId> {
        self.runways
            .iter()
            .filter(|r| r.is_eligible(op))
            .map(Runway::id)
            .collect()
    }

    /// Slot of the lowest-id free runway capable of `op`.
    pub(crate) fn first_eligible(&self, op: Operation) -> Option<usize> {
        self.runways.iter().position(|r| r.is_eligible(op))
    }

    /// Occupy the runway in `slot` until `now + service_min`.
    pub(crate) fn occupy(
        &mut self,
        slot:        usize,
        aircraft:    AircraftId,
        now:         SimTime,
        service_min: u32,
    ) -> &Runway {
        let runway = &mut self.runways[slot];
        runway.occupy(aircraft, now, service_min);
        runway
    }

    pub fn has_eligible(&self, op: Operation) -> bool {
        self.runways.iter().any(|r| r.is_eligible(op))
    }

    pub fn get(&self, id: RunwayId) -> Option<&Runway> {
        self.runways.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Runway> {
        self.runways.iter()
    }

    pub fn len(&self) -> usize {
        self.runways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runways.is_empty()
    }
}
