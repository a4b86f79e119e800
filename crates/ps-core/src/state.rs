//! The full simulation snapshot handed between the engine and its host.

use serde::{Deserialize, Serialize};

use crate::log::RateLog;
use crate::species::{Species, TrophicLevel};

/// Sunlight stored at startup and after a reset.
pub const INITIAL_SUNLIGHT: f64 = 200.0;

/// Everything the engine advances and the renderer reads.
///
/// The species array is indexed by [`TrophicLevel::index`]; its order and
/// the identity of each slot never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// The five species in trophic order.
    pub species: [Species; TrophicLevel::COUNT],
    /// Stored sunlight, within `[0, sunlight_cap]`.
    pub sunlight: f64,
    /// Simulated seconds since start or last reset.
    pub simulated_time: f64,
    /// Whether the host should skip ticks.
    pub paused: bool,
    /// Species targeted by per-species commands.
    pub selected_index: usize,
    /// Recent rate summaries.
    pub log: RateLog,
    /// Last five-second bucket that produced a summary.
    pub last_log_bucket: i64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl SimulationState {
    /// The fixed starting configuration.
    pub fn initial() -> Self {
        Self {
            species: TrophicLevel::ALL.map(Species::new),
            sunlight: INITIAL_SUNLIGHT,
            simulated_time: 0.0,
            paused: false,
            selected_index: 0,
            log: RateLog::default(),
            last_log_bucket: 0,
        }
    }

    /// Restore starting populations, sunlight and time. Rates, selection,
    /// pause flag and the log are left alone.
    pub fn reset(&mut self) {
        for species in &mut self.species {
            species.population = species.level.initial_population();
        }
        self.sunlight = INITIAL_SUNLIGHT;
        self.simulated_time = 0.0;
    }

    /// The record for `level`.
    pub fn species(&self, level: TrophicLevel) -> &Species {
        &self.species[level.index()]
    }

    /// Mutable record for `level`.
    pub fn species_mut(&mut self, level: TrophicLevel) -> &mut Species {
        &mut self.species[level.index()]
    }

    /// Level currently targeted by commands.
    pub fn selected_level(&self) -> TrophicLevel {
        TrophicLevel::ALL[self.selected_index % TrophicLevel::COUNT]
    }

    /// Record currently targeted by commands.
    pub fn selected(&self) -> &Species {
        self.species(self.selected_level())
    }

    /// Mutable record currently targeted by commands.
    pub fn selected_mut(&mut self) -> &mut Species {
        let level = self.selected_level();
        self.species_mut(level)
    }

    /// Move the selection down the chain, wrapping to grass.
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % TrophicLevel::COUNT;
    }

    /// Move the selection up the chain, wrapping to eagles.
    pub fn select_previous(&mut self) {
        self.selected_index = (self.selected_index + TrophicLevel::COUNT - 1) % TrophicLevel::COUNT;
    }

    /// Sum of all populations.
    pub fn total_biomass(&self) -> f64 {
        self.species.iter().map(|s| s.population).sum()
    }

    /// Sum of all consumer populations (everything but grass).
    pub fn animal_biomass(&self) -> f64 {
        self.species[1..].iter().map(|s| s.population).sum()
    }
}
