//! `atc-stats`: statistics collectors for the airport traffic simulator.
//!
//! Every collector implements `atc_airport::StatisticsCollector`:
//!
//! | Type           | What it keeps                                                |
//! |----------------|--------------------------------------------------------------|
//! | [`Statistics`] | Aggregates: queue maxima, totals, delays, runway busy time   |
//! | [`EventLog`]   | Every call, in order, as an [`Event`]                        |
//! | [`CsvCollector`] | `events.csv` + `queue_snapshots.csv` in a directory        |
//! | [`Fanout`]     | Forwards to two collectors                                   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use atc_stats::{CsvCollector, Fanout, Statistics};
//!
//! let csv = CsvCollector::new(Path::new("./output"))?;
//! let mut engine = EngineBuilder::new(params, Fanout(Statistics::default(), csv))
//!     .runways(runways)
//!     .build()?;
//! engine.run_for(24 * 60)?;
//! let (_, Fanout(stats, mut csv)) = engine.into_parts();
//! csv.finish()?;
//! println!("{stats}");
//! ```

pub mod csv;
pub mod error;
pub mod event_log;
pub mod fanout;
pub mod row;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use crate::csv::{CsvCollector, CsvWriter};
pub use error::{StatsError, StatsResult};
pub use event_log::{Event, EventLog, Outcome};
pub use fanout::Fanout;
pub use row::{EventRow, QueueSnapshotRow};
pub use statistics::Statistics;
