use rand::SeedableRng;
use rand::rngs::StdRng;

use ps_core::{HostSettings, SimulationParams, SimulationState};

use crate::command::{Command, apply_command};
use crate::config::SimConfig;
use crate::engine::{self, TickFlows};
use crate::error::SimResult;

/// The top-level simulation orchestrator.
///
/// Owns the snapshot, the parameters, the host settings and the seeded
/// noise source. Commands and ticks are applied strictly one after another.
pub struct Simulation {
    state: SimulationState,
    params: SimulationParams,
    host: HostSettings,
    rng: StdRng,
    seed: u64,
    ticks: u64,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("ticks", &self.ticks)
            .field("time", &self.state.simulated_time)
            .field("paused", &self.state.paused)
            .field("seed", &self.seed)
            .finish()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_parts(SimConfig::default())
    }
}

impl Simulation {
    /// Create a simulation in its initial state after validating `config`.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: SimConfig) -> Self {
        tracing::debug!(seed = config.seed, dt = config.params.dt, "creating simulation");
        Self {
            state: SimulationState::initial(),
            params: config.params,
            host: config.host,
            rng: StdRng::seed_from_u64(config.seed),
            seed: config.seed,
            ticks: 0,
        }
    }

    /// Apply a command before the next tick.
    pub fn apply(&mut self, command: Command) {
        apply_command(command, &mut self.state, &mut self.params, &mut self.host);
        if command == Command::Reset {
            tracing::info!(ticks = self.ticks, "simulation reset");
        }
    }

    /// Advance one tick regardless of the paused flag.
    pub fn tick(&mut self) -> TickFlows {
        let (next, flows) = engine::advance(&self.state, &self.params, &mut self.rng);
        self.state = next;
        self.ticks += 1;
        flows
    }

    /// Advance one tick unless paused. Returns whether a tick ran.
    pub fn update(&mut self) -> bool {
        if self.state.paused {
            return false;
        }
        self.tick();
        true
    }

    /// Advance `n` ticks regardless of the paused flag.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Replace the engine parameters between ticks.
    pub fn set_params(&mut self, params: SimulationParams) -> SimResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Read-only snapshot for renderers.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current engine parameters.
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Current host settings.
    pub fn host(&self) -> &HostSettings {
        &self.host
    }

    /// Seed the noise source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks executed since creation. Unaffected by resets.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::POPULATION_STEP;

    #[test]
    fn update_respects_pause() {
        let mut sim = Simulation::default();
        assert!(sim.update());
        sim.apply(Command::TogglePause);
        assert!(!sim.update());
        assert_eq!(sim.ticks(), 1);

        // An explicit tick still runs while paused.
        sim.tick();
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn run_advances_time() {
        let mut sim = Simulation::default();
        sim.run(20);
        assert_eq!(sim.ticks(), 20);
        assert!((sim.state().simulated_time - 2.0).abs() < 1e-9);
    }

    #[test]
    fn seeded_noise_is_reproducible() {
        let run = |seed| {
            let mut sim = Simulation::new(SimConfig::default().with_seed(seed).with_noise(true))
                .unwrap();
            sim.run(200);
            sim.state().clone()
        };
        assert_eq!(run(5), run(5));
        assert_ne!(run(5), run(6));
    }

    #[test]
    fn reset_from_any_state() {
        let mut sim = Simulation::default();
        sim.apply(Command::AdjustGrowth(0.3));
        sim.apply(Command::AddPopulation(POPULATION_STEP));
        sim.run(137);
        sim.apply(Command::Reset);

        let pops: Vec<f64> = sim.state().species.iter().map(|s| s.population).collect();
        assert_eq!(pops, vec![200.0, 60.0, 25.0, 12.0, 6.0]);
        assert_eq!(sim.state().sunlight, 200.0);
        assert_eq!(sim.state().simulated_time, 0.0);
        assert!((sim.state().species[0].growth_rate - 0.8).abs() < 1e-12);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SimConfig::default().with_params(SimulationParams::default().with_dt(0.0));
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn set_params_validates() {
        let mut sim = Simulation::default();
        assert!(sim.set_params(SimulationParams::default().with_dt(-1.0)).is_err());
        sim.set_params(SimulationParams::default().with_dt(0.2)).unwrap();
        sim.tick();
        assert!((sim.state().simulated_time - 0.2).abs() < 1e-12);
    }
}
