//! Trophic levels and the per-species record.
//!
//! All five species share one record type; their roles differ only by the
//! data attached to their [`TrophicLevel`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in the food chain. The order of [`TrophicLevel::ALL`] is the
/// order in which the engine evaluates flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrophicLevel {
    /// Primary producer fed by sunlight.
    Grass,
    /// Eats grass.
    Grasshopper,
    /// Eats grasshoppers.
    Frog,
    /// Eats frogs.
    Snake,
    /// Apex predator; eats snakes.
    Eagle,
}

impl TrophicLevel {
    /// Number of levels in the chain.
    pub const COUNT: usize = 5;

    /// All levels in trophic order.
    pub const ALL: [TrophicLevel; Self::COUNT] = [
        TrophicLevel::Grass,
        TrophicLevel::Grasshopper,
        TrophicLevel::Frog,
        TrophicLevel::Snake,
        TrophicLevel::Eagle,
    ];

    /// Index of this level in [`TrophicLevel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Grass => 0,
            Self::Grasshopper => 1,
            Self::Frog => 2,
            Self::Snake => 3,
            Self::Eagle => 4,
        }
    }

    /// Level at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Plural display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "Grass",
            Self::Grasshopper => "Grasshoppers",
            Self::Frog => "Frogs",
            Self::Snake => "Snakes",
            Self::Eagle => "Eagles",
        }
    }

    /// Single-character symbol used by proportional displays.
    pub fn symbol(self) -> char {
        match self {
            Self::Grass => '.',
            Self::Grasshopper => 'h',
            Self::Frog => 'f',
            Self::Snake => 's',
            Self::Eagle => 'e',
        }
    }

    /// Starting population.
    pub fn initial_population(self) -> f64 {
        match self {
            Self::Grass => 200.0,
            Self::Grasshopper => 60.0,
            Self::Frog => 25.0,
            Self::Snake => 12.0,
            Self::Eagle => 6.0,
        }
    }

    /// Default `(growth_rate, death_rate)` pair.
    pub fn default_rates(self) -> (f64, f64) {
        match self {
            Self::Grass => (0.50, 0.05),
            Self::Grasshopper => (0.30, 0.10),
            Self::Frog => (0.22, 0.12),
            Self::Snake => (0.20, 0.14),
            Self::Eagle => (0.18, 0.15),
        }
    }

    /// The level this one eats, or `None` for grass.
    pub fn prey(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Slot of the link feeding this level in `SimulationParams::links`.
    pub fn link_index(self) -> Option<usize> {
        self.index().checked_sub(1)
    }
}

impl fmt::Display for TrophicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flows recorded for a species during the most recent tick. Overwritten
/// every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickDiagnostics {
    /// Biomass gained this tick.
    pub gross_growth: f64,
    /// Biomass lost to mortality this tick (excludes predation).
    pub gross_death: f64,
    /// Gross growth per individual per simulated second.
    pub per_capita_growth_rate: f64,
    /// Gross death per individual per simulated second.
    pub per_capita_death_rate: f64,
}

/// Mutable state of one trophic level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Fixed role in the chain.
    pub level: TrophicLevel,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: char,
    /// Current biomass; never negative.
    pub population: f64,
    /// Intrinsic growth rate. Only grass growth reads it.
    pub growth_rate: f64,
    /// Natural death rate per individual per second.
    pub death_rate: f64,
    /// Last-tick diagnostics.
    pub diagnostics: TickDiagnostics,
}

impl Species {
    /// Create the default record for `level`.
    pub fn new(level: TrophicLevel) -> Self {
        let (growth_rate, death_rate) = level.default_rates();
        Self {
            level,
            name: level.name().to_string(),
            symbol: level.symbol(),
            population: level.initial_population(),
            growth_rate,
            death_rate,
            diagnostics: TickDiagnostics::default(),
        }
    }

    /// Add `delta` to the growth rate, flooring at zero.
    pub fn adjust_growth(&mut self, delta: f64) {
        self.growth_rate = (self.growth_rate + delta).max(0.0);
    }

    /// Add `delta` to the death rate, flooring at zero.
    pub fn adjust_death(&mut self, delta: f64) {
        self.death_rate = (self.death_rate + delta).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_in_trophic_order() {
        for (i, level) in TrophicLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(TrophicLevel::from_index(i), Some(*level));
        }
        assert_eq!(TrophicLevel::from_index(5), None);
    }

    #[test]
    fn prey_chain() {
        assert_eq!(TrophicLevel::Grass.prey(), None);
        assert_eq!(TrophicLevel::Grasshopper.prey(), Some(TrophicLevel::Grass));
        assert_eq!(TrophicLevel::Eagle.prey(), Some(TrophicLevel::Snake));
        assert_eq!(TrophicLevel::Grass.link_index(), None);
        assert_eq!(TrophicLevel::Eagle.link_index(), Some(3));
    }

    #[test]
    fn default_species_records() {
        let hopper = Species::new(TrophicLevel::Grasshopper);
        assert_eq!(hopper.name, "Grasshoppers");
        assert_eq!(hopper.symbol, 'h');
        assert!((hopper.population - 60.0).abs() < f64::EPSILON);
        assert!((hopper.growth_rate - 0.30).abs() < f64::EPSILON);
        assert!((hopper.death_rate - 0.10).abs() < f64::EPSILON);
        assert_eq!(hopper.diagnostics, TickDiagnostics::default());
    }

    #[test]
    fn rate_adjustments_floor_at_zero() {
        let mut eagle = Species::new(TrophicLevel::Eagle);
        eagle.adjust_death(-1.0);
        assert_eq!(eagle.death_rate, 0.0);
        eagle.adjust_growth(0.01);
        assert!((eagle.growth_rate - 0.19).abs() < 1e-12);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(TrophicLevel::Snake.to_string(), "Snakes");
    }
}
