//! Rate-based demand generation with spawn-time jitter.
//!
//! # Accumulator model
//!
//! Each direction keeps a fractional accumulator.  Every tick it grows by
//! `rate_per_hour × tick_size_min / 60`; every whole unit becomes one
//! aircraft and the fraction carries over.  Expected throughput therefore
//! converges on `rate_per_hour` whatever the tick size, and no demand is
//! lost to rounding.

use log::debug;

use atc_aircraft::{Aircraft, AircraftId, FlightDirection};
use atc_airport::{Airport, AirportResult};
use atc_core::{SimRng, SimTime, SimulationParams};

use crate::PendingBuffer;

// ── DemandStream ──────────────────────────────────────────────────────────────

/// Demand for one direction: accumulator, id sequence and pending buffer.
pub struct DemandStream {
    direction:     FlightDirection,
    per_tick:      f64,
    jitter_stddev: f64,
    fuel_bounds:   (u32, u32),
    accumulator:   f64,
    next_seq:      u32,
    pending:       PendingBuffer,
}

impl DemandStream {
    pub fn inbound(params: &SimulationParams) -> Self {
        Self::new(
            FlightDirection::Inbound,
            params.expected_per_tick(params.inbound_rate_per_hour),
            params.arrival_stddev_min,
            (params.fuel_initial_min_min, params.fuel_initial_max_min),
        )
    }

    pub fn outbound(params: &SimulationParams) -> Self {
        Self::new(
            FlightDirection::Outbound,
            params.expected_per_tick(params.outbound_rate_per_hour),
            params.departure_stddev_min,
            (0, 0),
        )
    }

    fn new(direction: FlightDirection, per_tick: f64, jitter_stddev: f64, fuel_bounds: (u32, u32)) -> Self {
        Self {
            direction,
            per_tick,
            jitter_stddev,
            fuel_bounds,
            accumulator: 0.0,
            next_seq:    1,
            pending:     PendingBuffer::new(),
        }
    }

    #[inline]
    pub fn direction(&self) -> FlightDirection {
        self.direction
    }

    /// Fractional demand carried into the next tick.  Always in `[0, 1)`
    /// between ticks.
    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Expected aircraft per tick.
    #[inline]
    pub fn per_tick(&self) -> f64 {
        self.per_tick
    }

    /// Aircraft created so far.
    #[inline]
    pub fn created(&self) -> u64 {
        (self.next_seq - 1) as u64
    }

    #[inline]
    pub fn pending(&self) -> &PendingBuffer {
        &self.pending
    }

    /// Accrue one tick of demand and create the whole aircraft it yields.
    ///
    /// Draw order per aircraft: fuel (inbound only), then jitter.
    fn generate(&mut self, now: SimTime, rng: &mut SimRng) -> Vec<Aircraft> {
        self.accumulator += self.per_tick;
        let mut created = Vec::new();
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;

            let id = AircraftId { direction: self.direction, seq: self.next_seq };
            self.next_seq += 1;

            let fuel = match self.direction {
                FlightDirection::Inbound  => rng.gen_range(self.fuel_bounds.0..=self.fuel_bounds.1),
                FlightDirection::Outbound => 0,
            };
            let jitter = rng.gaussian(self.jitter_stddev);
            let spawn = SimTime::from_minutes_f64(now.minutes() as f64 + jitter);

            debug!("{id} created at {now}, due {spawn}, fuel {fuel}");
            created.push(Aircraft::new(id, now, spawn, fuel));
        }
        created
    }
}

// ── DemandGenerator ───────────────────────────────────────────────────────────

/// Both demand streams.
pub struct DemandGenerator {
    inbound:  DemandStream,
    outbound: DemandStream,
}

impl DemandGenerator {
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            inbound:  DemandStream::inbound(params),
            outbound: DemandStream::outbound(params),
        }
    }

    #[inline]
    pub fn inbound(&self) -> &DemandStream {
        &self.inbound
    }

    #[inline]
    pub fn outbound(&self) -> &DemandStream {
        &self.outbound
    }

    /// Aircraft created so far, both directions.
    pub fn created(&self) -> u64 {
        self.inbound.created() + self.outbound.created()
    }

    /// Aircraft waiting for their spawn time, both directions.
    pub fn pending_len(&self) -> usize {
        self.inbound.pending.len() + self.outbound.pending.len()
    }

    /// Admit every pending aircraft with `spawn_time <= now` to its queue,
    /// stamped with its spawn time.  Returns how many were admitted.
    pub fn flush_pending(&mut self, now: SimTime, airport: &mut Airport) -> AirportResult<usize> {
        let mut admitted = 0;
        for aircraft in self.inbound.pending.drain_due(now) {
            let at = aircraft.spawn_time();
            airport.handle_inbound(aircraft, at)?;
            admitted += 1;
        }
        for aircraft in self.outbound.pending.drain_due(now) {
            let at = aircraft.spawn_time();
            airport.handle_outbound(aircraft, at)?;
            admitted += 1;
        }
        Ok(admitted)
    }

    /// Create this tick's arrivals then departures.  The returned batch is
    /// the tick's creation list, inbound first; hand it back through
    /// [`stage`](Self::stage) once emergencies are attached.
    pub fn generate(&mut self, now: SimTime, rng: &mut SimRng) -> Vec<Aircraft> {
        let mut created = self.inbound.generate(now, rng);
        created.extend(self.outbound.generate(now, rng));
        created
    }

    /// Move a creation batch into the pending buffers.
    pub fn stage(&mut self, created: Vec<Aircraft>) {
        for aircraft in created {
            match aircraft.direction() {
                FlightDirection::Inbound  => self.inbound.pending.push(aircraft),
                FlightDirection::Outbound => self.outbound.pending.push(aircraft),
            }
        }
    }
}
