//! The `Aircraft` entity: immutable identity plus mutable simulation state.

use std::fmt;

use atc_core::SimTime;

use crate::{AircraftError, AircraftResult, EmergencyKind};

// ── FlightDirection ───────────────────────────────────────────────────────────

/// Whether an aircraft wants to land or take off.  Fixed at creation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlightDirection {
    Inbound,
    Outbound,
}

impl FlightDirection {
    /// One-letter prefix used in aircraft ids.
    #[inline]
    pub fn prefix(self) -> char {
        match self {
            FlightDirection::Inbound  => 'I',
            FlightDirection::Outbound => 'O',
        }
    }
}

impl fmt::Display for FlightDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDirection::Inbound  => f.write_str("INBOUND"),
            FlightDirection::Outbound => f.write_str("OUTBOUND"),
        }
    }
}

// ── AircraftId ────────────────────────────────────────────────────────────────

/// Unique aircraft identifier: a direction plus a per-direction sequence
/// number starting at 1.  Displays as `I1`, `I2`, … / `O1`, `O2`, ….
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftId {
    pub direction: FlightDirection,
    pub seq:       u32,
}

impl AircraftId {
    #[inline]
    pub fn inbound(seq: u32) -> Self {
        Self { direction: FlightDirection::Inbound, seq }
    }

    #[inline]
    pub fn outbound(seq: u32) -> Self {
        Self { direction: FlightDirection::Outbound, seq }
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.prefix(), self.seq)
    }
}

// ── Aircraft ──────────────────────────────────────────────────────────────────

/// One simulated aircraft.
///
/// Only the direction-matching admission timestamp is ever set: inbound
/// aircraft get `entered_holding_at`, outbound get `joined_takeoff_queue_at`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    id:                      AircraftId,
    scheduled_time:          SimTime,
    spawn_time:              SimTime,
    fuel_remaining:          u32,
    emergency:               Option<EmergencyKind>,
    entered_holding_at:      Option<SimTime>,
    joined_takeoff_queue_at: Option<SimTime>,
}

impl Aircraft {
    /// Create an aircraft that is not yet admitted to any queue.
    ///
    /// `fuel_remaining` is only meaningful for inbound aircraft; outbound
    /// aircraft are created with 0.
    pub fn new(
        id:             AircraftId,
        scheduled_time: SimTime,
        spawn_time:     SimTime,
        fuel_remaining: u32,
    ) -> Self {
        Self {
            id,
            scheduled_time,
            spawn_time,
            fuel_remaining,
            emergency: None,
            entered_holding_at: None,
            joined_takeoff_queue_at: None,
        }
    }

    #[inline]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    #[inline]
    pub fn direction(&self) -> FlightDirection {
        self.id.direction
    }

    /// The instant the demand model intended this aircraft to appear.
    #[inline]
    pub fn scheduled_time(&self) -> SimTime {
        self.scheduled_time
    }

    /// The jittered instant the aircraft actually enters its queue.
    #[inline]
    pub fn spawn_time(&self) -> SimTime {
        self.spawn_time
    }

    #[inline]
    pub fn fuel_remaining(&self) -> u32 {
        self.fuel_remaining
    }

    #[inline]
    pub fn emergency(&self) -> Option<EmergencyKind> {
        self.emergency
    }

    #[inline]
    pub fn is_emergency(&self) -> bool {
        self.emergency.is_some()
    }

    #[inline]
    pub fn entered_holding_at(&self) -> Option<SimTime> {
        self.entered_holding_at
    }

    #[inline]
    pub fn joined_takeoff_queue_at(&self) -> Option<SimTime> {
        self.joined_takeoff_queue_at
    }

    /// Whichever admission timestamp applies to this aircraft's direction.
    #[inline]
    pub fn admitted_at(&self) -> Option<SimTime> {
        match self.direction() {
            FlightDirection::Inbound  => self.entered_holding_at,
            FlightDirection::Outbound => self.joined_takeoff_queue_at,
        }
    }

    /// Minutes spent queued as of `now` (0 if not yet admitted).
    #[inline]
    pub fn queued_minutes(&self, now: SimTime) -> u64 {
        self.admitted_at().map_or(0, |at| now.since(at))
    }

    /// Attach an emergency.  An aircraft carries at most one emergency for
    /// its whole life; it is never upgraded or cleared.
    pub fn declare_emergency(&mut self, kind: EmergencyKind) -> AircraftResult<()> {
        if self.emergency.is_some() {
            return Err(AircraftError::EmergencyAlreadyDeclared(self.id));
        }
        self.emergency = Some(kind);
        Ok(())
    }

    /// Stamp the direction-matching admission timestamp.  May only happen once.
    pub fn admit(&mut self, at: SimTime) -> AircraftResult<()> {
        if self.admitted_at().is_some() {
            return Err(AircraftError::AlreadyAdmitted(self.id));
        }
        match self.direction() {
            FlightDirection::Inbound  => self.entered_holding_at = Some(at),
            FlightDirection::Outbound => self.joined_takeoff_queue_at = Some(at),
        }
        Ok(())
    }

    /// Burn `amount` fuel units, saturating at 0.  Returns the fuel left.
    #[inline]
    pub fn burn_fuel(&mut self, amount: u32) -> u32 {
        self.fuel_remaining = self.fuel_remaining.saturating_sub(amount);
        self.fuel_remaining
    }
}
