//! Forward every collector call to two collectors.

use atc_aircraft::Aircraft;
use atc_airport::{Runway, StatisticsCollector};
use atc_core::{SimTime, SimulationParams};

/// A collector pair.  Nest for more than two: `Fanout(a, Fanout(b, c))`.
pub struct Fanout<A, B>(pub A, pub B);

impl<A: StatisticsCollector, B: StatisticsCollector> StatisticsCollector for Fanout<A, B> {
    fn configure_from_params(&mut self, params: &SimulationParams, seed: u64) {
        self.0.configure_from_params(params, seed);
        self.1.configure_from_params(params, seed);
    }
    fn snapshot_queues(&mut self, holding_size: usize, takeoff_size: usize, time: SimTime) {
        self.0.snapshot_queues(holding_size, takeoff_size, time);
        self.1.snapshot_queues(holding_size, takeoff_size, time);
    }
    fn record_landing(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.0.record_landing(aircraft, time);
        self.1.record_landing(aircraft, time);
    }
    fn record_takeoff(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.0.record_takeoff(aircraft, time);
        self.1.record_takeoff(aircraft, time);
    }
    fn record_diversion(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.0.record_diversion(aircraft, time);
        self.1.record_diversion(aircraft, time);
    }
    fn record_cancellation(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.0.record_cancellation(aircraft, time);
        self.1.record_cancellation(aircraft, time);
    }
    fn record_runway_usage(&mut self, runway: &Runway, duration_min: u64) {
        self.0.record_runway_usage(runway, duration_min);
        self.1.record_runway_usage(runway, duration_min);
    }
}
