//! Plain data row types written by the CSV backend.

/// One terminal aircraft event or runway release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub time:     u64,
    /// `landing`, `takeoff`, `diversion`, `cancellation` or `runway_usage`.
    pub event:    &'static str,
    /// Aircraft id (`I12`) or runway id (`R1`).
    pub subject:  String,
    /// Minutes queued for aircraft events, busy minutes for runway usage.
    pub minutes:  u64,
    /// Emergency kind, or empty.
    pub emergency: String,
}

/// Queue sizes at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSnapshotRow {
    pub time:    u64,
    pub holding: u64,
    pub takeoff: u64,
}
