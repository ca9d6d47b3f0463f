//! `Statistics`: the aggregate report of a run.

use std::collections::BTreeMap;
use std::fmt;

use atc_aircraft::Aircraft;
use atc_airport::{Runway, StatisticsCollector};
use atc_core::{RunwayId, SimTime, SimulationParams};

/// Aggregating collector.  All durations are minutes.
///
/// Queue maxima only ever grow over a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Seed reported by the engine at construction.
    pub seed: Option<u64>,

    pub max_holding_size: usize,
    pub max_takeoff_size: usize,
    pub snapshots:        u64,
    pub last_snapshot:    Option<SimTime>,

    pub total_landings:      u64,
    pub emergency_landings:  u64,
    pub total_holding_time:  u64,
    pub total_arrival_delay: u64,
    pub max_arrival_delay:   u64,

    pub total_takeoffs:          u64,
    pub total_takeoff_wait_time: u64,

    pub diversions:    u64,
    pub cancellations: u64,

    /// Summed finished-occupation time per runway.
    pub runway_busy_time: BTreeMap<RunwayId, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aircraft that reached any terminal outcome.
    pub fn total_completed(&self) -> u64 {
        self.total_landings + self.total_takeoffs + self.diversions + self.cancellations
    }

    pub fn average_holding_time(&self) -> Option<f64> {
        mean(self.total_holding_time, self.total_landings)
    }

    pub fn average_arrival_delay(&self) -> Option<f64> {
        mean(self.total_arrival_delay, self.total_landings)
    }

    pub fn average_takeoff_wait(&self) -> Option<f64> {
        mean(self.total_takeoff_wait_time, self.total_takeoffs)
    }

    /// Busy fraction per runway over `elapsed_min` minutes.
    pub fn runway_utilisation(&self, elapsed_min: u64) -> BTreeMap<RunwayId, f64> {
        self.runway_busy_time
            .iter()
            .map(|(&id, &busy)| {
                let share = if elapsed_min == 0 { 0.0 } else { busy as f64 / elapsed_min as f64 };
                (id, share)
            })
            .collect()
    }
}

fn mean(total: u64, count: u64) -> Option<f64> {
    (count > 0).then(|| total as f64 / count as f64)
}

impl StatisticsCollector for Statistics {
    fn configure_from_params(&mut self, _params: &SimulationParams, seed: u64) {
        self.seed = Some(seed);
    }

    fn snapshot_queues(&mut self, holding_size: usize, takeoff_size: usize, time: SimTime) {
        self.max_holding_size = self.max_holding_size.max(holding_size);
        self.max_takeoff_size = self.max_takeoff_size.max(takeoff_size);
        self.snapshots += 1;
        self.last_snapshot = Some(time);
    }

    fn record_landing(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.total_landings += 1;
        if aircraft.is_emergency() {
            self.emergency_landings += 1;
        }
        if let Some(entered) = aircraft.entered_holding_at() {
            self.total_holding_time += time.since(entered);
        }
        let delay = time.since(aircraft.scheduled_time());
        self.total_arrival_delay += delay;
        self.max_arrival_delay = self.max_arrival_delay.max(delay);
    }

    fn record_takeoff(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.total_takeoffs += 1;
        if let Some(joined) = aircraft.joined_takeoff_queue_at() {
            self.total_takeoff_wait_time += time.since(joined);
        }
    }

    fn record_diversion(&mut self, _aircraft: &Aircraft, _time: SimTime) {
        self.diversions += 1;
    }

    fn record_cancellation(&mut self, _aircraft: &Aircraft, _time: SimTime) {
        self.cancellations += 1;
    }

    fn record_runway_usage(&mut self, runway: &Runway, duration_min: u64) {
        *self.runway_busy_time.entry(runway.id()).or_default() += duration_min;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg = |v: Option<f64>| v.map_or_else(|| "-".to_owned(), |x| format!("{x:.1} min"));

        writeln!(f, "landings:            {} ({} emergency)", self.total_landings, self.emergency_landings)?;
        writeln!(f, "  avg holding time:  {}", avg(self.average_holding_time()))?;
        writeln!(f, "  avg arrival delay: {}", avg(self.average_arrival_delay()))?;
        writeln!(f, "  max arrival delay: {} min", self.max_arrival_delay)?;
        writeln!(f, "takeoffs:            {}", self.total_takeoffs)?;
        writeln!(f, "  avg takeoff wait:  {}", avg(self.average_takeoff_wait()))?;
        writeln!(f, "diversions:          {}", self.diversions)?;
        writeln!(f, "cancellations:       {}", self.cancellations)?;
        writeln!(f, "max holding queue:   {}", self.max_holding_size)?;
        write!(f, "max takeoff queue:   {}", self.max_takeoff_size)?;
        for (id, busy) in &self.runway_busy_time {
            write!(f, "\nrunway {id} busy:      {busy} min")?;
        }
        Ok(())
    }
}
