//! Priority functions for the two queues.
//!
//! A policy turns an admitted aircraft into an ordering key.  Keys sort
//! ascending, so the smallest key is the highest-priority aircraft.

use atc_aircraft::{Aircraft, AircraftId, FlightDirection};
use atc_core::SimTime;

/// Emergency status as a sort key.  `Emergency` sorts first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Urgency {
    Emergency,
    Routine,
}

impl Urgency {
    #[inline]
    pub fn of(aircraft: &Aircraft) -> Urgency {
        if aircraft.is_emergency() { Urgency::Emergency } else { Urgency::Routine }
    }
}

/// A priority function for one queue direction.
pub trait QueuePolicy {
    /// Strict total order key; the smallest key is dequeued first.
    type Key: Ord + Clone + std::fmt::Debug;

    /// The only direction this queue accepts.
    const DIRECTION: FlightDirection;

    /// Compute the key of an aircraft that has already been admitted.
    fn key(aircraft: &Aircraft) -> Self::Key;
}

// ── Holding ───────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct HoldingKey {
    pub urgency:     Urgency,
    pub fuel:        u32,
    pub entered_at:  SimTime,
    pub id:          AircraftId,
}

/// Inbound ordering: emergency, then least fuel, then FIFO, then id.
pub struct HoldingPolicy;

impl QueuePolicy for HoldingPolicy {
    type Key = HoldingKey;
    const DIRECTION: FlightDirection = FlightDirection::Inbound;

    fn key(aircraft: &Aircraft) -> HoldingKey {
        HoldingKey {
            urgency:    Urgency::of(aircraft),
            fuel:       aircraft.fuel_remaining(),
            entered_at: aircraft.entered_holding_at().unwrap_or_default(),
            id:         aircraft.id(),
        }
    }
}

// ── Takeoff ───────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TakeoffKey {
    pub urgency:   Urgency,
    pub joined_at: SimTime,
    pub id:        AircraftId,
}

/// Outbound ordering: emergency, then FIFO, then id.  Fuel is not tracked.
pub struct TakeoffPolicy;

impl QueuePolicy for TakeoffPolicy {
    type Key = TakeoffKey;
    const DIRECTION: FlightDirection = FlightDirection::Outbound;

    fn key(aircraft: &Aircraft) -> TakeoffKey {
        TakeoffKey {
            urgency:   Urgency::of(aircraft),
            joined_at: aircraft.joined_takeoff_queue_at().unwrap_or_default(),
            id:        aircraft.id(),
        }
    }
}
