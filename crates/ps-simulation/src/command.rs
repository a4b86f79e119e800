//! Discrete edits applied between ticks.

use ps_core::{HostSettings, SimulationParams, SimulationState};

/// Growth/death rate change per keystroke.
pub const RATE_STEP: f64 = 0.01;
/// Population added per keystroke.
pub const POPULATION_STEP: f64 = 10.0;
/// Step delay change per keystroke, in seconds.
pub const STEP_DELAY_STEP: f64 = 0.02;

/// A host-to-engine command. Quitting is a host concern and has no variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Flip the paused flag.
    TogglePause,
    /// Restore starting populations, sunlight and time.
    Reset,
    /// Select the next level down the chain, wrapping.
    SelectNext,
    /// Select the previous level up the chain, wrapping.
    SelectPrevious,
    /// Add biomass to the selected species.
    AddPopulation(f64),
    /// Shift the selected species' growth rate.
    AdjustGrowth(f64),
    /// Shift the selected species' death rate.
    AdjustDeath(f64),
    /// Flip consumption noise.
    ToggleNoise,
    /// Flip the renderer's color preference.
    ToggleColorPreference,
    /// Shift the wall-clock delay between ticks.
    AdjustStepDelay(f64),
}

impl Command {
    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TogglePause => "toggle-pause",
            Self::Reset => "reset",
            Self::SelectNext => "select-next",
            Self::SelectPrevious => "select-previous",
            Self::AddPopulation(_) => "add-population",
            Self::AdjustGrowth(_) => "adjust-growth",
            Self::AdjustDeath(_) => "adjust-death",
            Self::ToggleNoise => "toggle-noise",
            Self::ToggleColorPreference => "toggle-color",
            Self::AdjustStepDelay(_) => "adjust-step-delay",
        }
    }
}

/// Apply `command` in place. Never called mid-tick.
pub fn apply_command(
    command: Command,
    state: &mut SimulationState,
    params: &mut SimulationParams,
    host: &mut HostSettings,
) {
    match command {
        Command::TogglePause => state.paused = !state.paused,
        Command::Reset => state.reset(),
        Command::SelectNext => state.select_next(),
        Command::SelectPrevious => state.select_previous(),
        Command::AddPopulation(amount) => {
            let species = state.selected_mut();
            species.population = (species.population + amount).max(0.0);
        }
        Command::AdjustGrowth(delta) => state.selected_mut().adjust_growth(delta),
        Command::AdjustDeath(delta) => state.selected_mut().adjust_death(delta),
        Command::ToggleNoise => params.noise_enabled = !params.noise_enabled,
        Command::ToggleColorPreference => host.use_color = !host.use_color,
        Command::AdjustStepDelay(delta) => {
            host.step_delay = (host.step_delay + delta)
                .clamp(HostSettings::MIN_STEP_DELAY, HostSettings::MAX_STEP_DELAY);
        }
    }
    tracing::debug!(
        command = command.label(),
        selected = state.selected().name.as_str(),
        "applied command"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::TrophicLevel;

    struct Fixture {
        state: SimulationState,
        params: SimulationParams,
        host: HostSettings,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                state: SimulationState::initial(),
                params: SimulationParams::default(),
                host: HostSettings::default(),
            }
        }

        fn apply(&mut self, command: Command) {
            apply_command(command, &mut self.state, &mut self.params, &mut self.host);
        }
    }

    #[test]
    fn toggle_pause_flips() {
        let mut f = Fixture::new();
        f.apply(Command::TogglePause);
        assert!(f.state.paused);
        f.apply(Command::TogglePause);
        assert!(!f.state.paused);
    }

    #[test]
    fn add_population_targets_selection_without_upper_clamp() {
        let mut f = Fixture::new();
        f.apply(Command::SelectNext);
        for _ in 0..100 {
            f.apply(Command::AddPopulation(POPULATION_STEP));
        }
        assert!((f.state.species(TrophicLevel::Grasshopper).population - 1060.0).abs() < 1e-9);
        assert!((f.state.species(TrophicLevel::Grass).population - 200.0).abs() < 1e-12);
    }

    #[test]
    fn rate_adjustments_floor_at_zero() {
        let mut f = Fixture::new();
        f.apply(Command::SelectPrevious);
        assert_eq!(f.state.selected_level(), TrophicLevel::Eagle);
        for _ in 0..30 {
            f.apply(Command::AdjustDeath(-RATE_STEP));
        }
        assert_eq!(f.state.selected().death_rate, 0.0);
        f.apply(Command::AdjustGrowth(RATE_STEP));
        assert!((f.state.selected().growth_rate - 0.19).abs() < 1e-12);
    }

    #[test]
    fn reset_keeps_rates_and_selection() {
        let mut f = Fixture::new();
        f.apply(Command::SelectNext);
        f.apply(Command::AdjustDeath(RATE_STEP));
        f.apply(Command::AddPopulation(POPULATION_STEP));
        f.state.simulated_time = 9.0;
        f.apply(Command::Reset);

        assert_eq!(f.state.selected_index, 1);
        assert!((f.state.selected().population - 60.0).abs() < f64::EPSILON);
        assert!((f.state.selected().death_rate - 0.11).abs() < 1e-12);
        assert_eq!(f.state.simulated_time, 0.0);
    }

    #[test]
    fn host_and_param_toggles() {
        let mut f = Fixture::new();
        f.apply(Command::ToggleNoise);
        assert!(f.params.noise_enabled);
        f.apply(Command::ToggleColorPreference);
        assert!(!f.host.use_color);
    }

    #[test]
    fn step_delay_clamped() {
        let mut f = Fixture::new();
        for _ in 0..10 {
            f.apply(Command::AdjustStepDelay(-STEP_DELAY_STEP));
        }
        assert_eq!(f.host.step_delay, 0.0);
        for _ in 0..100 {
            f.apply(Command::AdjustStepDelay(STEP_DELAY_STEP));
        }
        assert_eq!(f.host.step_delay, 1.0);
    }
}
