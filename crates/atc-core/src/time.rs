//! Simulation time model.
//!
//! # Design
//!
//! Time is a plain ordered integer instant: whole minutes since the start of
//! the simulation.  All schedule arithmetic is integer addition and
//! comparison, so there is no floating-point drift and ordering is exact.
//!
//! The clock only moves forward, in fixed `tick_size_min` steps, and only
//! the engine advances it.

use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in minutes since simulation start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub fn minutes(self) -> u64 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Build an instant from a real-valued minute offset, truncating towards
    /// zero and clamping negatives to [`SimTime::ZERO`].
    #[inline]
    pub fn from_minutes_f64(minutes: f64) -> SimTime {
        if minutes.is_nan() || minutes <= 0.0 {
            SimTime::ZERO
        } else {
            SimTime(minutes as u64)
        }
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T+{}m", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single monotonically increasing simulation clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Minutes per tick.  Always > 0 (validated with the params).
    pub tick_size_min: u32,
    now: SimTime,
}

impl SimClock {
    pub fn new(tick_size_min: u32) -> Self {
        Self { tick_size_min, now: SimTime::ZERO }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Advance by one tick and return the new instant.
    #[inline]
    pub fn advance(&mut self) -> SimTime {
        self.now = self.now + self.tick_size_min as u64;
        self.now
    }

    /// Number of ticks completed so far.
    #[inline]
    pub fn ticks_elapsed(&self) -> u64 {
        self.now.0 / self.tick_size_min.max(1) as u64
    }

    /// Break elapsed time into (day, hour, minute) components.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total = self.now.0;
        let days = total / 1_440;
        let hours = ((total % 1_440) / 60) as u32;
        let minutes = (total % 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.now, d, h, m)
    }
}
