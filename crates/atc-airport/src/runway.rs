//! A single runway: capability set plus current occupation.

use std::fmt;

use atc_aircraft::AircraftId;
use atc_core::{RunwayId, SimTime};

/// What an aircraft wants to do on a runway.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Landing,
    Takeoff,
}

/// Capability set of a runway: landing, takeoff, or both.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayMode {
    pub landing: bool,
    pub takeoff: bool,
}

impl RunwayMode {
    pub const LANDING: RunwayMode = RunwayMode { landing: true, takeoff: false };
    pub const TAKEOFF: RunwayMode = RunwayMode { landing: false, takeoff: true };
    pub const MIXED:   RunwayMode = RunwayMode { landing: true, takeoff: true };

    #[inline]
    pub fn supports(self, op: Operation) -> bool {
        match op {
            Operation::Landing => self.landing,
            Operation::Takeoff => self.takeoff,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.landing && !self.takeoff
    }
}

impl fmt::Display for RunwayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.landing, self.takeoff) {
            (true, true)   => f.write_str("L/T"),
            (true, false)  => f.write_str("L"),
            (false, true)  => f.write_str("T"),
            (false, false) => f.write_str("-"),
        }
    }
}

/// The occupation currently holding a runway.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Occupation {
    pub aircraft: AircraftId,
    pub since:    SimTime,
}

/// One runway.  Exactly one aircraft occupies it in `[since, busy_until)`.
///
/// A runway becomes eligible again only once the pool has released the
/// finished occupation, which also reports its busy time.
#[derive(Clone, Debug)]
pub struct Runway {
    id:         RunwayId,
    mode:       RunwayMode,
    busy_until: SimTime,
    occupation: Option<Occupation>,
}

impl Runway {
    pub fn new(id: RunwayId, mode: RunwayMode) -> Self {
        Self {
            id,
            mode,
            busy_until: SimTime::ZERO,
            occupation: None,
        }
    }

    #[inline]
    pub fn id(&self) -> RunwayId {
        self.id
    }

    #[inline]
    pub fn mode(&self) -> RunwayMode {
        self.mode
    }

    #[inline]
    pub fn busy_until(&self) -> SimTime {
        self.busy_until
    }

    #[inline]
    pub fn occupation(&self) -> Option<Occupation> {
        self.occupation
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupation.is_none()
    }

    /// Free and capable of `op`.
    #[inline]
    pub fn is_eligible(&self, op: Operation) -> bool {
        self.is_free() && self.mode.supports(op)
    }

    pub(crate) fn occupy(&mut self, aircraft: AircraftId, now: SimTime, service_min: u32) {
        self.busy_until = now + service_min as u64;
        self.occupation = Some(Occupation { aircraft, since: now });
    }

    /// End the occupation if `busy_until <= now`, returning its span in minutes.
    pub(crate) fn release(&mut self, now: SimTime) -> Option<u64> {
        let occupation = self.occupation?;
        if self.busy_until > now {
            return None;
        }
        self.occupation = None;
        Some(self.busy_until.since(occupation.since))
    }
}
