//! `atc-sim`: tick loop orchestrator for the airport traffic simulator.
//!
//! # Tick pipeline
//!
//! ```text
//! tick():
//!   (paused → return immediately, nothing mutated)
//!   ① Advance  : clock += tick_size
//!   ② Release  : free runways whose busy_until <= now, report usage
//!   ③ Flush    : pending aircraft with spawn_time <= now join their queue,
//!                stamped with spawn_time
//!   ④ Generate : accumulators turn hourly rates into whole aircraft,
//!                each with a fuel load and a jittered spawn time
//!   ⑤ Emergency: up to emergencies_per_tick of this tick's new aircraft
//!   ⑥ Enforce  : fuel burn + diversion, takeoff wait + cancellation
//!   ⑦ Assign   : landings, then takeoffs
//!   ⑧ Snapshot : queue sizes to the collector
//! ```
//!
//! Release precedes assignment so a runway freed this tick is usable this
//! tick.  Enforcement precedes assignment so a diverted or cancelled
//! aircraft can never also be given a runway in the same tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atc_airport::{NoopCollector, Runway, RunwayMode};
//! use atc_core::{RunwayId, SimulationParams};
//! use atc_sim::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new(SimulationParams::default(), NoopCollector)
//!     .runway(Runway::new(RunwayId(1), RunwayMode::MIXED))
//!     .build()?;
//! engine.run_for(24 * 60)?;
//! ```

pub mod builder;
pub mod demand;
pub mod engine;
pub mod error;
pub mod pending;


pub use builder::EngineBuilder;
pub use demand::{DemandGenerator, DemandStream};
pub use engine::{SimulationEngine, TickSummary};
pub use error::{SimError, SimResult};
pub use pending::PendingBuffer;
