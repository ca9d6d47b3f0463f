//! Emergency categories and the per-tick emergency sampler.

use std::fmt;

use atc_core::{SimRng, SimulationParams};

use crate::{Aircraft, AircraftResult};

/// The kind of emergency an aircraft has declared.
///
/// "No emergency" is `Option::<EmergencyKind>::None` on the aircraft; every
/// variant here outranks a non-emergency aircraft equally.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmergencyKind {
    MechanicalFailure,
    PassengerIllness,
    FuelEmergency,
}

impl fmt::Display for EmergencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmergencyKind::MechanicalFailure => "MECHANICAL_FAILURE",
            EmergencyKind::PassengerIllness  => "PASSENGER_ILLNESS",
            EmergencyKind::FuelEmergency     => "FUEL_EMERGENCY",
        })
    }
}

/// Draws emergencies for a subset of the aircraft created in one tick.
///
/// Up to `per_tick` aircraft are chosen uniformly without replacement from
/// the whole tick's creation list (inbound and outbound together), then each
/// chosen aircraft gets one kind from a single uniform draw `r`:
///
/// ```text
/// r < p_mechanical               → MechanicalFailure
/// r < p_mechanical + p_illness   → PassengerIllness
/// otherwise                      → FuelEmergency
/// ```
#[derive(Clone, Debug)]
pub struct EmergencySampler {
    p_mechanical: f64,
    p_illness:    f64,
    per_tick:     usize,
}

impl EmergencySampler {
    pub fn new(p_mechanical: f64, p_illness: f64, per_tick: u32) -> Self {
        Self { p_mechanical, p_illness, per_tick: per_tick as usize }
    }

    pub fn from_params(params: &SimulationParams) -> Self {
        Self::new(
            params.p_mechanical_failure,
            params.p_passenger_illness,
            params.emergencies_per_tick,
        )
    }

    /// Map a uniform draw in `[0, 1)` to a kind.
    pub fn kind_for(&self, r: f64) -> EmergencyKind {
        if r < self.p_mechanical {
            EmergencyKind::MechanicalFailure
        } else if r < self.p_mechanical + self.p_illness {
            EmergencyKind::PassengerIllness
        } else {
            EmergencyKind::FuelEmergency
        }
    }

    /// Attach emergencies to up to `per_tick` of `created`.  Returns how many
    /// were attached.  Consumes no randomness when nothing can be chosen.
    pub fn apply(&self, created: &mut [Aircraft], rng: &mut SimRng) -> AircraftResult<usize> {
        if self.per_tick == 0 || created.is_empty() {
            return Ok(0);
        }
        let chosen = rng.sample_indices(created.len(), self.per_tick);
        for &i in &chosen {
            let kind = self.kind_for(rng.random::<f64>());
            created[i].declare_emergency(kind)?;
        }
        Ok(chosen.len())
    }
}
