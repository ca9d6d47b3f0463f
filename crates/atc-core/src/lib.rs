//! `atc-core`: foundational types for the airport traffic simulator.
//!
//! This crate is a dependency of every other `atc-*` crate.  It has no
//! `atc-*` dependencies and minimal external ones (`rand`, `rand_distr` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `RunwayId`                                             |
//! | [`time`]      | `SimTime`, `SimClock`                                  |
//! | [`rng`]       | `SimRng` (the single seeded source of randomness)      |
//! | [`params`]    | `SimulationParams` and its validation                  |
//! | [`error`]     | `AtcError`, `AtcResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AtcError, AtcResult};
pub use ids::RunwayId;
pub use params::SimulationParams;
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
