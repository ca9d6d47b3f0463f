//! `EventLog`: an in-memory record of every collector call.

use std::collections::BTreeMap;

use atc_aircraft::{Aircraft, AircraftId};
use atc_airport::{Runway, StatisticsCollector};
use atc_core::{RunwayId, SimTime, SimulationParams};

/// The terminal outcome of an aircraft.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Landed,
    TookOff,
    Diverted,
    Cancelled,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Landed    => "landing",
            Outcome::TookOff   => "takeoff",
            Outcome::Diverted  => "diversion",
            Outcome::Cancelled => "cancellation",
        }
    }
}

/// One recorded collector call.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Configured { seed: u64 },
    Snapshot { time: SimTime, holding: usize, takeoff: usize },
    /// The aircraft as it was when it left the simulation.
    Terminal { outcome: Outcome, aircraft: Aircraft, time: SimTime },
    RunwayUsage { runway: RunwayId, duration_min: u64 },
}

/// Collector that keeps every event in call order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal events only, in order.
    pub fn terminals(&self) -> impl Iterator<Item = (Outcome, &Aircraft, SimTime)> {
        self.events.iter().filter_map(|e| match e {
            Event::Terminal { outcome, aircraft, time } => Some((*outcome, aircraft, *time)),
            _ => None,
        })
    }

    /// Every outcome reported per aircraft.  A well-behaved run has exactly
    /// one entry per id.
    pub fn outcomes_by_aircraft(&self) -> BTreeMap<AircraftId, Vec<Outcome>> {
        let mut by_id: BTreeMap<AircraftId, Vec<Outcome>> = BTreeMap::new();
        for (outcome, aircraft, _) in self.terminals() {
            by_id.entry(aircraft.id()).or_default().push(outcome);
        }
        by_id
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.terminals().filter(|(o, _, _)| *o == outcome).count()
    }

    pub fn snapshots(&self) -> impl Iterator<Item = (SimTime, usize, usize)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Snapshot { time, holding, takeoff } => Some((*time, *holding, *takeoff)),
            _ => None,
        })
    }

    fn terminal(&mut self, outcome: Outcome, aircraft: &Aircraft, time: SimTime) {
        self.events.push(Event::Terminal { outcome, aircraft: aircraft.clone(), time });
    }
}

impl StatisticsCollector for EventLog {
    fn configure_from_params(&mut self, _params: &SimulationParams, seed: u64) {
        self.events.push(Event::Configured { seed });
    }

    fn snapshot_queues(&mut self, holding_size: usize, takeoff_size: usize, time: SimTime) {
        self.events.push(Event::Snapshot { time, holding: holding_size, takeoff: takeoff_size });
    }

    fn record_landing(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.terminal(Outcome::Landed, aircraft, time);
    }

    fn record_takeoff(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.terminal(Outcome::TookOff, aircraft, time);
    }

    fn record_diversion(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.terminal(Outcome::Diverted, aircraft, time);
    }

    fn record_cancellation(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.terminal(Outcome::Cancelled, aircraft, time);
    }

    fn record_runway_usage(&mut self, runway: &Runway, duration_min: u64) {
        self.events.push(Event::RunwayUsage { runway: runway.id(), duration_min });
    }
}
