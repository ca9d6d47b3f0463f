//! Simulation parameters and their one-time validation.
//!
//! Typically built in code or loaded from a JSON file by the host (with the
//! `serde` feature) and handed to the engine builder, which calls
//! [`SimulationParams::validate`] before any tick runs.

use crate::{AtcError, AtcResult};

/// Every tunable consumed by the engine.
///
/// All durations are whole minutes; rates are aircraft per hour.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationParams {
    /// Minutes the clock advances per tick.  Must be > 0.
    pub tick_size_min: u32,

    /// Mean inbound demand, aircraft per hour.
    pub inbound_rate_per_hour: f64,
    /// Mean outbound demand, aircraft per hour.
    pub outbound_rate_per_hour: f64,

    /// Standard deviation of inbound spawn-time jitter (minutes).
    pub arrival_stddev_min: f64,
    /// Standard deviation of outbound spawn-time jitter (minutes).
    pub departure_stddev_min: f64,

    /// Inclusive bounds of the uniform initial fuel draw for inbound aircraft.
    pub fuel_initial_min_min: u32,
    pub fuel_initial_max_min: u32,

    /// Fuel units burnt per minute spent in the holding queue.
    pub fuel_burn_per_min: u32,

    /// Probability a chosen emergency is a mechanical failure.
    pub p_mechanical_failure: f64,
    /// Probability a chosen emergency is a passenger illness.  The remainder
    /// up to 1 is the fuel-emergency probability.
    pub p_passenger_illness: f64,

    /// Maximum emergencies attached per tick, across both directions.
    pub emergencies_per_tick: u32,

    /// Minutes a runway stays occupied per landing or takeoff.  Must be > 0.
    pub service_time_min: u32,

    /// Takeoff-queue wait (minutes) beyond which a departure is cancelled.
    /// Must be > 0.
    pub max_takeoff_wait_min: u32,

    /// A holding aircraft whose fuel falls to or below this is diverted.
    pub fuel_diversion_threshold: u32,

    /// RNG seed.  `None` runs with seed 0 so every run stays reproducible.
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            tick_size_min:            5,
            inbound_rate_per_hour:    20.0,
            outbound_rate_per_hour:   20.0,
            arrival_stddev_min:       5.0,
            departure_stddev_min:     5.0,
            fuel_initial_min_min:     30,
            fuel_initial_max_min:     90,
            fuel_burn_per_min:        1,
            p_mechanical_failure:     0.4,
            p_passenger_illness:      0.3,
            emergencies_per_tick:     0,
            service_time_min:         3,
            max_takeoff_wait_min:     60,
            fuel_diversion_threshold: 10,
            seed:                     None,
        }
    }
}

impl SimulationParams {
    /// Check every rule once.  Returns the first violation found.
    pub fn validate(&self) -> AtcResult<()> {
        if self.tick_size_min == 0 {
            return Err(AtcError::config("tick_size_min", "must be > 0"));
        }
        non_negative("inbound_rate_per_hour", self.inbound_rate_per_hour)?;
        non_negative("outbound_rate_per_hour", self.outbound_rate_per_hour)?;
        non_negative("arrival_stddev_min", self.arrival_stddev_min)?;
        non_negative("departure_stddev_min", self.departure_stddev_min)?;

        if self.fuel_initial_max_min < self.fuel_initial_min_min {
            return Err(AtcError::config(
                "fuel_initial_max_min",
                "must be >= fuel_initial_min_min",
            ));
        }

        probability("p_mechanical_failure", self.p_mechanical_failure)?;
        probability("p_passenger_illness", self.p_passenger_illness)?;
        if self.p_mechanical_failure + self.p_passenger_illness > 1.0 {
            return Err(AtcError::config(
                "p_mechanical_failure + p_passenger_illness",
                "must be <= 1",
            ));
        }

        if self.service_time_min == 0 {
            return Err(AtcError::config("service_time_min", "must be > 0"));
        }
        if self.max_takeoff_wait_min == 0 {
            return Err(AtcError::config("max_takeoff_wait_min", "must be > 0"));
        }
        Ok(())
    }

    /// Expected aircraft per tick for an hourly `rate`:
    /// `rate × tick_size_min / 60`.  Multiplying before dividing keeps
    /// whole-number results (e.g. 6/h at 10-minute ticks) exact.
    #[inline]
    pub fn expected_per_tick(&self, rate_per_hour: f64) -> f64 {
        rate_per_hour * self.tick_size_min as f64 / 60.0
    }

    /// Probability that a chosen emergency is a fuel emergency.
    #[inline]
    pub fn p_fuel_emergency(&self) -> f64 {
        (1.0 - self.p_mechanical_failure - self.p_passenger_illness).max(0.0)
    }

    /// The seed actually used by the engine.
    #[inline]
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }
}

fn non_negative(field: &str, value: f64) -> AtcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AtcError::config(field, "must be a finite value >= 0"));
    }
    Ok(())
}

fn probability(field: &str, value: f64) -> AtcResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AtcError::config(field, "must be in [0, 1]"));
    }
    Ok(())
}
