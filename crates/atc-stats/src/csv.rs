//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `queue_snapshots.csv`

use std::fs::File;
use std::path::Path;

use ::csv::Writer;
use log::warn;

use atc_aircraft::Aircraft;
use atc_airport::{Runway, StatisticsCollector};
use atc_core::SimTime;

use crate::{EventRow, Outcome, QueueSnapshotRow, StatsError, StatsResult};

// ── CsvWriter ─────────────────────────────────────────────────────────────────

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> StatsResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time", "event", "subject", "minutes", "emergency"])?;

        let mut snapshots = Writer::from_path(dir.join("queue_snapshots.csv"))?;
        snapshots.write_record(["time", "holding", "takeoff"])?;

        Ok(Self { events, snapshots, finished: false })
    }

    pub fn write_event(&mut self, row: &EventRow) -> StatsResult<()> {
        self.events.write_record(&[
            row.time.to_string(),
            row.event.to_owned(),
            row.subject.clone(),
            row.minutes.to_string(),
            row.emergency.clone(),
        ])?;
        Ok(())
    }

    pub fn write_snapshot(&mut self, row: &QueueSnapshotRow) -> StatsResult<()> {
        self.snapshots.write_record(&[
            row.time.to_string(),
            row.holding.to_string(),
            row.takeoff.to_string(),
        ])?;
        Ok(())
    }

    /// Flush both files.  Idempotent: safe to call more than once.
    pub fn finish(&mut self) -> StatsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

// ── CsvCollector ──────────────────────────────────────────────────────────────

/// A [`StatisticsCollector`] that streams every event to a [`CsvWriter`].
///
/// Collector calls have no return value, so write errors are stored.  Only
/// the first is kept; retrieve it with [`take_error`][Self::take_error] or
/// get it from [`finish`][Self::finish].
pub struct CsvCollector {
    writer:     CsvWriter,
    last_error: Option<StatsError>,
}

impl CsvCollector {
    pub fn new(dir: &Path) -> StatsResult<Self> {
        Ok(Self { writer: CsvWriter::new(dir)?, last_error: None })
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<StatsError> {
        self.last_error.take()
    }

    /// Flush the files and surface any stored error.
    pub fn finish(&mut self) -> StatsResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    fn store_err(&mut self, result: StatsResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!("CSV output failed, further errors are dropped: {e}");
                self.last_error = Some(e);
            }
        }
    }

    fn aircraft_event(&mut self, outcome: Outcome, aircraft: &Aircraft, time: SimTime) {
        let row = EventRow {
            time:      time.minutes(),
            event:     outcome.as_str(),
            subject:   aircraft.id().to_string(),
            minutes:   aircraft.queued_minutes(time),
            emergency: aircraft.emergency().map(|k| k.to_string()).unwrap_or_default(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }
}

impl StatisticsCollector for CsvCollector {
    fn snapshot_queues(&mut self, holding_size: usize, takeoff_size: usize, time: SimTime) {
        let row = QueueSnapshotRow {
            time:    time.minutes(),
            holding: holding_size as u64,
            takeoff: takeoff_size as u64,
        };
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn record_landing(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.aircraft_event(Outcome::Landed, aircraft, time);
    }

    fn record_takeoff(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.aircraft_event(Outcome::TookOff, aircraft, time);
    }

    fn record_diversion(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.aircraft_event(Outcome::Diverted, aircraft, time);
    }

    fn record_cancellation(&mut self, aircraft: &Aircraft, time: SimTime) {
        self.aircraft_event(Outcome::Cancelled, aircraft, time);
    }

    fn record_runway_usage(&mut self, runway: &Runway, duration_min: u64) {
        let row = EventRow {
            time:      runway.busy_until().minutes(),
            event:     "runway_usage",
            subject:   runway.id().to_string(),
            minutes:   duration_min,
            emergency: String::new(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }
}
