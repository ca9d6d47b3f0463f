//! Fluent builder for constructing a [`SimulationEngine`].

use atc_airport::{Airport, Runway, RunwayPool, StatisticsCollector};
use atc_core::SimulationParams;

use crate::{SimResult, SimulationEngine};

/// Fluent builder for [`SimulationEngine<C>`].
///
/// # Required inputs
///
/// - [`SimulationParams`]: rates, jitter, fuel, emergencies, limits, …
/// - `C: StatisticsCollector`: where events are reported
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.runway(r)`    | No runways (nothing is ever served)  |
/// | `.runways(v)`   | No runways                           |
/// | `.seed(s)`      | `params.seed`, else 0                |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(params, Statistics::default())
///     .runway(Runway::new(RunwayId(1), RunwayMode::LANDING))
///     .runway(Runway::new(RunwayId(2), RunwayMode::TAKEOFF))
///     .seed(7)
///     .build()?;
/// engine.run_for(180)?;
/// ```
pub struct EngineBuilder<C: StatisticsCollector> {
    params:    SimulationParams,
    collector: C,
    runways:   Vec<Runway>,
}

impl<C: StatisticsCollector> EngineBuilder<C> {
    pub fn new(params: SimulationParams, collector: C) -> Self {
        Self { params, collector, runways: Vec::new() }
    }

    pub fn runway(mut self, runway: Runway) -> Self {
        self.runways.push(runway);
        self
    }

    pub fn runways(mut self, runways: impl IntoIterator<Item = Runway>) -> Self {
        self.runways.extend(runways);
        self
    }

    /// Override the RNG seed in the params.
    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = Some(seed);
        self
    }

    /// Validate everything and return a ready-to-run engine at time 0.
    pub fn build(self) -> SimResult<SimulationEngine<C>> {
        let pool = RunwayPool::new(self.runways)?;
        let airport = Airport::new(pool);
        SimulationEngine::new(self.params, airport, self.collector)
    }
}
