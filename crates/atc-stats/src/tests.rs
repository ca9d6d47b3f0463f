//! Integration tests for atc-stats.

use atc_aircraft::{Aircraft, AircraftId, EmergencyKind};
use atc_core::SimTime;

fn landed(seq: u32, scheduled: u64, entered: u64) -> Aircraft {
    let mut a = Aircraft::new(AircraftId::inbound(seq), SimTime(scheduled), SimTime(scheduled), 60);
    a.admit(SimTime(entered)).unwrap();
    a
}

fn departed(seq: u32, joined: u64) -> Aircraft {
    let mut a = Aircraft::new(AircraftId::outbound(seq), SimTime(joined), SimTime(joined), 0);
    a.admit(SimTime(joined)).unwrap();
    a
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod statistics_tests {
    use super::*;
    use atc_airport::{Runway, RunwayMode, StatisticsCollector};
    use atc_core::{RunwayId, SimulationParams};

    use crate::Statistics;

    #[test]
    fn empty_report() {
        let stats = Statistics::new();
        assert_eq!(stats.total_completed(), 0);
        assert_eq!(stats.average_holding_time(), None);
        assert_eq!(stats.average_arrival_delay(), None);
        assert_eq!(stats.average_takeoff_wait(), None);
        assert!(stats.runway_utilisation(100).is_empty());
    }

    #[test]
    fn seed_recorded_on_configure() {
        let mut stats = Statistics::new();
        stats.configure_from_params(&SimulationParams::default(), 17);
        assert_eq!(stats.seed, Some(17));
    }

    #[test]
    fn queue_maxima_only_grow() {
        let mut stats = Statistics::new();
        for (t, (h, k)) in [(3, 1), (7, 0), (2, 4), (0, 0)].into_iter().enumerate() {
            stats.snapshot_queues(h, k, SimTime(10 * (t as u64 + 1)));
        }
        assert_eq!(stats.max_holding_size, 7);
        assert_eq!(stats.max_takeoff_size, 4);
        assert_eq!(stats.snapshots, 4);
        assert_eq!(stats.last_snapshot, Some(SimTime(40)));
    }

    #[test]
    fn landing_aggregates() {
        let mut stats = Statistics::new();
        stats.record_landing(&landed(1, 10, 10), SimTime(30)); // hold 20, delay 20
        let mut urgent = landed(2, 20, 25);
        urgent.declare_emergency(EmergencyKind::PassengerIllness).unwrap();
        stats.record_landing(&urgent, SimTime(30)); // hold 5, delay 10

        assert_eq!(stats.total_landings, 2);
        assert_eq!(stats.emergency_landings, 1);
        assert_eq!(stats.total_holding_time, 25);
        assert_eq!(stats.average_holding_time(), Some(12.5));
        assert_eq!(stats.average_arrival_delay(), Some(15.0));
        assert_eq!(stats.max_arrival_delay, 20);
    }

    #[test]
    fn early_landing_counts_as_zero_delay() {
        // Negative jitter can land an aircraft before its schedule.
        let mut a = Aircraft::new(AircraftId::inbound(1), SimTime(50), SimTime(20), 60);
        a.admit(SimTime(20)).unwrap();
        let mut stats = Statistics::new();
        stats.record_landing(&a, SimTime(30));
        assert_eq!(stats.total_arrival_delay, 0);
        assert_eq!(stats.total_holding_time, 10);
    }

    #[test]
    fn takeoffs_and_losses() {
        let mut stats = Statistics::new();
        stats.record_takeoff(&departed(1, 10), SimTime(40));
        stats.record_takeoff(&departed(2, 20), SimTime(30));
        stats.record_diversion(&landed(3, 0, 0), SimTime(60));
        stats.record_cancellation(&departed(4, 0), SimTime(70));

        assert_eq!(stats.total_takeoffs, 2);
        assert_eq!(stats.average_takeoff_wait(), Some(20.0));
        assert_eq!(stats.diversions, 1);
        assert_eq!(stats.cancellations, 1);
        assert_eq!(stats.total_completed(), 4);
    }

    #[test]
    fn runway_busy_time_and_utilisation() {
        let mut stats = Statistics::new();
        let r1 = Runway::new(RunwayId(1), RunwayMode::LANDING);
        let r2 = Runway::new(RunwayId(2), RunwayMode::MIXED);
        stats.record_runway_usage(&r1, 3);
        stats.record_runway_usage(&r1, 3);
        stats.record_runway_usage(&r2, 5);

        assert_eq!(stats.runway_busy_time[&RunwayId(1)], 6);
        let util = stats.runway_utilisation(20);
        assert_eq!(util[&RunwayId(1)], 0.3);
        assert_eq!(util[&RunwayId(2)], 0.25);
        assert_eq!(stats.runway_utilisation(0)[&RunwayId(2)], 0.0);
    }

    #[test]
    fn report_lists_everything() {
        let mut stats = Statistics::new();
        stats.record_landing(&landed(1, 10, 10), SimTime(30));
        stats.record_runway_usage(&Runway::new(RunwayId(4), RunwayMode::MIXED), 3);
        let text = stats.to_string();
        assert!(text.contains("landings:            1 (0 emergency)"));
        assert!(text.contains("avg holding time:  20.0 min"));
        assert!(text.contains("avg takeoff wait:  -"));
        assert!(text.contains("runway R4 busy:      3 min"));
    }
}

// ── EventLog and Fanout ───────────────────────────────────────────────────────

#[cfg(test)]
mod event_log_tests {
    use super::*;
    use atc_airport::StatisticsCollector;
    use atc_core::SimulationParams;

    use crate::{Event, EventLog, Fanout, Outcome, Statistics};

    #[test]
    fn keeps_calls_in_order() {
        let mut log = EventLog::new();
        log.configure_from_params(&SimulationParams::default(), 3);
        log.record_landing(&landed(1, 0, 0), SimTime(10));
        log.snapshot_queues(2, 1, SimTime(10));
        log.record_cancellation(&departed(1, 0), SimTime(20));

        assert_eq!(log.events.len(), 4);
        assert_eq!(log.events[0], Event::Configured { seed: 3 });
        assert!(matches!(log.events[2], Event::Snapshot { holding: 2, takeoff: 1, .. }));
        assert_eq!(log.count(Outcome::Landed), 1);
        assert_eq!(log.count(Outcome::Cancelled), 1);
        assert_eq!(log.count(Outcome::Diverted), 0);
        assert_eq!(log.snapshots().collect::<Vec<_>>(), vec![(SimTime(10), 2, 1)]);
    }

    #[test]
    fn outcomes_grouped_by_aircraft() {
        let mut log = EventLog::new();
        log.record_landing(&landed(1, 0, 0), SimTime(10));
        log.record_diversion(&landed(2, 0, 0), SimTime(10));
        log.record_takeoff(&departed(1, 0), SimTime(10));

        let by_id = log.outcomes_by_aircraft();
        assert_eq!(by_id.len(), 3);
        assert_eq!(by_id[&AircraftId::inbound(2)], vec![Outcome::Diverted]);
        assert_eq!(by_id[&AircraftId::outbound(1)], vec![Outcome::TookOff]);
    }

    #[test]
    fn fanout_feeds_both() {
        let mut both = Fanout(Statistics::new(), EventLog::new());
        both.configure_from_params(&SimulationParams::default(), 8);
        both.record_landing(&landed(1, 0, 0), SimTime(10));
        both.snapshot_queues(4, 0, SimTime(10));

        let Fanout(stats, log) = both;
        assert_eq!(stats.seed, Some(8));
        assert_eq!(stats.total_landings, 1);
        assert_eq!(stats.max_holding_size, 4);
        assert_eq!(log.events.len(), 3);
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::Landed.as_str(), "landing");
        assert_eq!(Outcome::TookOff.as_str(), "takeoff");
        assert_eq!(Outcome::Diverted.as_str(), "diversion");
        assert_eq!(Outcome::Cancelled.as_str(), "cancellation");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use atc_airport::{Runway, RunwayMode, StatisticsCollector};
    use atc_core::RunwayId;
    use tempfile::TempDir;

    use crate::{CsvCollector, CsvWriter, EventRow, QueueSnapshotRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<::csv::StringRecord>) {
        let mut rdr = ::csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("queue_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, "events.csv");
        assert_eq!(headers, ["time", "event", "subject", "minutes", "emergency"]);
        assert!(rows.is_empty());
        let (headers, _) = read(&dir, "queue_snapshots.csv");
        assert_eq!(headers, ["time", "holding", "takeoff"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow {
            time:      30,
            event:     "landing",
            subject:   "I1".into(),
            minutes:   20,
            emergency: String::new(),
        })
        .unwrap();
        w.write_snapshot(&QueueSnapshotRow { time: 30, holding: 2, takeoff: 5 }).unwrap();
        w.finish().unwrap();

        let (_, events) = read(&dir, "events.csv");
        assert_eq!(events.len(), 1);
        assert_eq!(&events[0][1], "landing");
        assert_eq!(&events[0][2], "I1");
        assert_eq!(&events[0][3], "20");
        let (_, snaps) = read(&dir, "queue_snapshots.csv");
        assert_eq!(&snaps[0][2], "5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn collector_streams_events() {
        let dir = tmp();
        let mut c = CsvCollector::new(dir.path()).unwrap();
        let mut urgent = landed(1, 0, 10);
        urgent.declare_emergency(EmergencyKind::FuelEmergency).unwrap();
        c.record_landing(&urgent, SimTime(40));
        c.record_cancellation(&departed(2, 5), SimTime(70));
        c.record_runway_usage(&Runway::new(RunwayId(2), RunwayMode::MIXED), 3);
        c.snapshot_queues(1, 0, SimTime(40));
        assert!(c.take_error().is_none());
        c.finish().unwrap();

        let (_, events) = read(&dir, "events.csv");
        assert_eq!(events.len(), 3);
        assert_eq!(&events[0][0], "40");
        assert_eq!(&events[0][2], "I1");
        assert_eq!(&events[0][3], "30"); // held 10 → 40
        assert_eq!(&events[0][4], "FUEL_EMERGENCY");
        assert_eq!(&events[1][1], "cancellation");
        assert_eq!(&events[1][2], "O2");
        assert_eq!(&events[1][3], "65");
        assert_eq!(&events[2][1], "runway_usage");
        assert_eq!(&events[2][2], "R2");

        let (_, snaps) = read(&dir, "queue_snapshots.csv");
        assert_eq!(snaps.len(), 1);
    }
}

// ── End-to-end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use atc_airport::{Runway, RunwayMode};
    use atc_core::{RunwayId, SimTime, SimulationParams};
    use atc_sim::EngineBuilder;
    use tempfile::TempDir;

    use crate::{CsvCollector, EventLog, Fanout, Outcome, Statistics};

    fn params(seed: u64) -> SimulationParams {
        SimulationParams {
            tick_size_min:          5,
            inbound_rate_per_hour:  18.0,
            outbound_rate_per_hour: 16.0,
            emergencies_per_tick:   1,
            seed:                   Some(seed),
            ..SimulationParams::default()
        }
    }

    fn runways() -> Vec<Runway> {
        vec![
            Runway::new(RunwayId(1), RunwayMode::LANDING),
            Runway::new(RunwayId(2), RunwayMode::TAKEOFF),
            Runway::new(RunwayId(3), RunwayMode::MIXED),
        ]
    }

    #[test]
    fn statistics_agree_with_event_log() {
        let collector = Fanout(Statistics::new(), EventLog::new());
        let mut engine = EngineBuilder::new(params(1), collector).runways(runways()).build().unwrap();
        engine.run_for(24 * 60).unwrap();
        let elapsed = engine.now().minutes();
        let (airport, Fanout(stats, log)) = engine.into_parts();

        assert_eq!(stats.seed, Some(1));
        assert_eq!(stats.total_landings as usize, log.count(Outcome::Landed));
        assert_eq!(stats.total_takeoffs as usize, log.count(Outcome::TookOff));
        assert_eq!(stats.diversions as usize, log.count(Outcome::Diverted));
        assert_eq!(stats.cancellations as usize, log.count(Outcome::Cancelled));
        assert_eq!(stats.snapshots, elapsed / 5);
        assert!(stats.total_landings > 0 && stats.total_takeoffs > 0);

        // Each aircraft ends exactly once.
        assert!(log.outcomes_by_aircraft().values().all(|v| v.len() == 1));

        // Snapshot times strictly increase and maxima bound every snapshot.
        let snaps: Vec<_> = log.snapshots().collect();
        assert!(snaps.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(snaps.iter().all(|&(_, h, t)| h <= stats.max_holding_size && t <= stats.max_takeoff_size));
        assert_eq!(snaps.last().map(|s| s.0), Some(SimTime(elapsed)));

        // A runway is never busy for more than the elapsed time.
        for (id, share) in stats.runway_utilisation(elapsed) {
            assert!((0.0..=1.0).contains(&share), "{id}: {share}");
            assert!(airport.runways.get(id).is_some());
        }
    }

    #[test]
    fn csv_output_from_a_run() {
        let dir = TempDir::new().unwrap();
        let csv = CsvCollector::new(dir.path()).unwrap();
        let mut engine = EngineBuilder::new(params(2), Fanout(EventLog::new(), csv))
            .runways(runways())
            .build()
            .unwrap();
        engine.run_for(6 * 60).unwrap();
        let (_, Fanout(log, mut csv)) = engine.into_parts();
        csv.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join("queue_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), log.snapshots().count());

        let mut rdr = ::csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let terminal_rows = rdr
            .records()
            .map(|r| r.unwrap())
            .filter(|r| &r[1] != "runway_usage")
            .count();
        assert_eq!(terminal_rows, log.terminals().count());
    }
}
