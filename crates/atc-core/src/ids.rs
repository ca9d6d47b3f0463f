//! Strongly typed runway identifier.
//!
//! Aircraft identifiers carry their flight direction and live in
//! `atc-aircraft`; runways only need a small ordered integer.

use std::fmt;

/// Identifier of a runway.  Ordering by id is the deterministic tie-break
/// when several runways are eligible for the same operation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayId(pub u16);

impl RunwayId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RunwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl From<u16> for RunwayId {
    #[inline(always)]
    fn from(n: u16) -> RunwayId {
        RunwayId(n)
    }
}
