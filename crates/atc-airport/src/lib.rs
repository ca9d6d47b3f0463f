//! `atc-airport`: runways and the runway assignment algorithm.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`runway`]    | `Operation`, `RunwayMode`, `Runway`                        |
//! | [`pool`]      | `RunwayPool`: release events and eligibility queries      |
//! | [`collector`] | `StatisticsCollector` trait, `NoopCollector`               |
//! | [`airport`]   | `Airport`: holding + takeoff queues + pool, assignment    |
//! | [`error`]     | `AirportError`, `AirportResult<T>`                         |
//!
//! # Assignment (greedy, per tick)
//!
//! ```text
//! while queue non-empty and an eligible runway is free:
//!     aircraft = queue.pop_best()
//!     runway   = free eligible runway with the smallest id
//!     runway.busy_until = now + service_time
//!     collector.record_landing / record_takeoff(aircraft, now)
//! ```
//!
//! Runways are fungible within a capability, so serving the best aircraft
//! first with the lowest-id runway is correct under the queue's order.

pub mod airport;
pub mod collector;
pub mod error;
pub mod pool;
pub mod runway;


pub use airport::Airport;
pub use collector::{NoopCollector, StatisticsCollector};
pub use error::{AirportError, AirportResult};
pub use pool::RunwayPool;
pub use runway::{Occupation, Operation, Runway, RunwayMode};
