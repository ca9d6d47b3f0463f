//! `atc-queue`: ordered-admission priority queues.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`policy`]   | `QueuePolicy` trait, `HoldingPolicy`, `TakeoffPolicy`, keys  |
//! | [`queue`]    | `AdmissionQueue<P>` (`BTreeMap<P::Key, Aircraft>`)          |
//! | [`holding`]  | `HoldingQueue` + fuel burn / diversion sweep                |
//! | [`takeoff`]  | `TakeoffQueue` + wait-limit cancellation sweep              |
//! | [`error`]    | `QueueError`, `QueueResult<T>`                              |
//!
//! # Ordering (best first)
//!
//! ```text
//! holding:  emergency before routine → less fuel → earlier admission → id
//! takeoff:  emergency before routine → earlier admission → id
//! ```
//!
//! Both orders are strict and total: the aircraft id is the final key and
//! ids are unique within a queue.

pub mod error;
pub mod holding;
pub mod policy;
pub mod queue;
pub mod takeoff;


pub use error::{QueueError, QueueResult};
pub use holding::HoldingQueue;
pub use policy::{HoldingKey, HoldingPolicy, QueuePolicy, TakeoffKey, TakeoffPolicy, Urgency};
pub use queue::AdmissionQueue;
pub use takeoff::TakeoffQueue;
