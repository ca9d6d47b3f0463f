//! The `SimulationEngine` struct and its tick loop.

use log::{info, trace};

use atc_aircraft::EmergencySampler;
use atc_airport::{Airport, StatisticsCollector};
use atc_core::{SimClock, SimRng, SimTime, SimulationParams};

use crate::{DemandGenerator, SimResult};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What one tick did.  Returned by [`SimulationEngine::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// The clock after advancing.
    pub time:        SimTime,
    pub released:    usize,
    pub admitted:    usize,
    pub created:     usize,
    pub emergencies: usize,
    pub diverted:    usize,
    pub cancelled:   usize,
    pub landed:      usize,
    pub departed:    usize,
}

// ── SimulationEngine ──────────────────────────────────────────────────────────

/// The only conductor of the simulation.
///
/// Owns the clock, the single seeded RNG, the demand generator (with its
/// accumulators and pending buffers), the airport and the statistics
/// collector.  Everything is single-threaded and each tick runs to
/// completion before returning.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder] or
/// [`SimulationEngine::new`].
pub struct SimulationEngine<C: StatisticsCollector> {
    params:    SimulationParams,
    clock:     SimClock,
    rng:       SimRng,
    demand:    DemandGenerator,
    sampler:   EmergencySampler,
    airport:   Airport,
    collector: C,
    paused:    bool,
}

impl<C: StatisticsCollector> SimulationEngine<C> {
    /// Validate `params`, configure `collector`, and return an engine at
    /// time 0.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`][crate::SimError::Config] if any parameter is
    /// invalid.  No tick can run on a rejected configuration.
    pub fn new(params: SimulationParams, airport: Airport, mut collector: C) -> SimResult<Self> {
        params.validate()?;
        let seed = params.effective_seed();
        collector.configure_from_params(&params, seed);

        Ok(Self {
            clock:   SimClock::new(params.tick_size_min),
            rng:     SimRng::new(seed),
            demand:  DemandGenerator::from_params(&params),
            sampler: EmergencySampler::from_params(&params),
            params,
            airport,
            collector,
            paused:  false,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick of the pipeline.
    ///
    /// Returns `Ok(None)` without touching any state while paused.
    ///
    /// # Errors
    ///
    /// Only on an invariant violation (e.g. a duplicate queue admission),
    /// which the host should treat as fatal.
    pub fn tick(&mut self) -> SimResult<Option<TickSummary>> {
        if self.paused {
            return Ok(None);
        }

        let now = self.clock.advance();
        let mut summary = TickSummary { time: now, ..TickSummary::default() };

        summary.released = self.airport.update_runways(now, &mut self.collector);
        summary.admitted = self.demand.flush_pending(now, &mut self.airport)?;

        let mut created = self.demand.generate(now, &mut self.rng);
        summary.created = created.len();
        summary.emergencies = self.sampler.apply(&mut created, &mut self.rng)?;
        self.demand.stage(created);

        let (diverted, cancelled) = self.enforce_constraints(now);
        summary.diverted = diverted;
        summary.cancelled = cancelled;

        let service = self.params.service_time_min;
        summary.landed = self.airport.assign_landing(now, service, &mut self.collector)?;
        summary.departed = self.airport.assign_takeoff(now, service, &mut self.collector)?;

        self.collector.snapshot_queues(
            self.airport.holding.len(),
            self.airport.takeoff.len(),
            now,
        );

        trace!("{}: {summary:?}", self.clock);
        Ok(Some(summary))
    }

    /// Tick until the clock has advanced by at least `duration_min`.
    ///
    /// Stops at the first tick whose post-advance clock reaches the target,
    /// so it may overshoot when `duration_min` is not a multiple of the tick
    /// size.  Does nothing while paused.
    pub fn run_for(&mut self, duration_min: u64) -> SimResult<()> {
        let end = self.clock.now() + duration_min;
        while !self.paused && self.clock.now() < end {
            self.tick()?;
        }
        Ok(())
    }

    /// Run exactly `n` ticks (fewer if paused).
    pub fn run_ticks(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            if self.tick()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[inline]
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    #[inline]
    pub fn demand(&self) -> &DemandGenerator {
        &self.demand
    }

    #[inline]
    pub fn collector(&self) -> &C {
        &self.collector
    }

    #[inline]
    pub fn collector_mut(&mut self) -> &mut C {
        &mut self.collector
    }

    /// Aircraft created since time 0, both directions.
    #[inline]
    pub fn created_count(&self) -> u64 {
        self.demand.created()
    }

    /// Aircraft created but not yet due to join a queue.
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.demand.pending_len()
    }

    /// Tear the engine down into its airport and collector.
    pub fn into_parts(self) -> (Airport, C) {
        (self.airport, self.collector)
    }

    // ── Constraint enforcement ────────────────────────────────────────────

    /// Burn holding fuel and divert exhausted aircraft, then cancel overdue
    /// departures.  Every removed aircraft is reported exactly once.
    fn enforce_constraints(&mut self, now: SimTime) -> (usize, usize) {
        let diverted = self.airport.holding.burn_and_divert(
            now,
            self.params.tick_size_min,
            self.params.fuel_burn_per_min,
            self.params.fuel_diversion_threshold,
        );
        for aircraft in &diverted {
            info!("{} diverted at {now} with {} fuel left", aircraft.id(), aircraft.fuel_remaining());
            self.collector.record_diversion(aircraft, now);
        }

        let cancelled = self.airport.takeoff.cancel_overdue(now, self.params.max_takeoff_wait_min);
        for aircraft in &cancelled {
            info!(
                "{} cancelled at {now} after {} min in the takeoff queue",
                aircraft.id(),
                aircraft.queued_minutes(now),
            );
            self.collector.record_cancellation(aircraft, now);
        }

        (diverted.len(), cancelled.len())
    }
}
