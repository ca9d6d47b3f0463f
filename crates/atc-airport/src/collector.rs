//! The statistics-collector contract.

use atc_aircraft::Aircraft;
use atc_core::{SimTime, SimulationParams};

use crate::Runway;

/// Receives every reportable event of a run.
///
/// Calls are fire-and-forget: no return value is consumed.  All methods have
/// default no-op implementations so implementors only override what they
/// care about.
///
/// Each aircraft is reported to exactly one of `record_landing`,
/// `record_takeoff`, `record_diversion` or `record_cancellation`, once.
///
/// # Example: diversion counter
///
/// ```rust,ignore
/// struct Diversions(usize);
///
/// impl StatisticsCollector for Diversions {
///     fn record_diversion(&mut self, _aircraft: &Aircraft, _time: SimTime) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait StatisticsCollector {
    /// Called once when the engine is built, with the validated params and
    /// the seed actually in use.
    fn configure_from_params(&mut self, _params: &SimulationParams, _seed: u64) {}

    /// Called at the end of every tick with the queue sizes after assignment.
    fn snapshot_queues(&mut self, _holding_size: usize, _takeoff_size: usize, _time: SimTime) {}

    /// An inbound aircraft was given a runway at `time`.
    fn record_landing(&mut self, _aircraft: &Aircraft, _time: SimTime) {}

    /// An outbound aircraft was given a runway at `time`.
    fn record_takeoff(&mut self, _aircraft: &Aircraft, _time: SimTime) {}

    /// A holding aircraft ran out of fuel margin and left for another field.
    fn record_diversion(&mut self, _aircraft: &Aircraft, _time: SimTime) {}

    /// An outbound aircraft waited too long and was cancelled.
    fn record_cancellation(&mut self, _aircraft: &Aircraft, _time: SimTime) {}

    /// A runway occupation finished after `duration_min` minutes.
    fn record_runway_usage(&mut self, _runway: &Runway, _duration_min: u64) {}
}

/// A [`StatisticsCollector`] that ignores everything.
pub struct NoopCollector;

impl StatisticsCollector for NoopCollector {}

impl<C: StatisticsCollector + ?Sized> StatisticsCollector for &mut C {
    fn configure_from_params(&mut self, params: &SimulationParams, seed: u64) {
        (**self).configure_from_params(params, seed);
    }
    fn snapshot_queues(&mut self, holding_size: usize, takeoff_size: usize, time: SimTime) {
        (**self).snapshot_queues(holding_size, takeoff_size, time);
    }
    fn record_landing(&mut self, aircraft: &Aircraft, time: SimTime) {
        (**self).record_landing(aircraft, time);
    }
    fn record_takeoff(&mut self, aircraft: &Aircraft, time: SimTime) {
        (**self).record_takeoff(aircraft, time);
    }
    fn record_diversion(&mut self, aircraft: &Aircraft, time: SimTime) {
        (**self).record_diversion(aircraft, time);
    }
    fn record_cancellation(&mut self, aircraft: &Aircraft, time: SimTime) {
        (**self).record_cancellation(aircraft, time);
    }
    fn record_runway_usage(&mut self, runway: &Runway, duration_min: u64) {
        (**self).record_runway_usage(runway, duration_min);
    }
}
