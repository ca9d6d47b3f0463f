//! `atc-aircraft`: the aircraft entity and its emergency model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`aircraft`]  | `FlightDirection`, `AircraftId`, `Aircraft`                |
//! | [`emergency`] | `EmergencyKind`, `EmergencySampler`                        |
//! | [`error`]     | `AircraftError`, `AircraftResult<T>`                       |
//!
//! # Lifecycle
//!
//! ```text
//! created (demand generator) → pending buffer → admitted to its queue
//!   → landed / took off      (terminal success)
//!   → diverted               (terminal failure, inbound only)
//!   → cancelled              (terminal failure, outbound only)
//! ```
//!
//! An aircraft is admitted at most once and is discarded after its terminal
//! event has been reported.

pub mod aircraft;
pub mod emergency;
pub mod error;

#[cfg(test)]
mod tests;

pub use aircraft::{Aircraft, AircraftId, FlightDirection};
pub use emergency::{EmergencyKind, EmergencySampler};
pub use error::{AircraftError, AircraftResult};
