//! Global rate constants for the engine and pacing preferences for the host.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::species::TrophicLevel;

/// Number of consumer links in the chain (one per non-producer level).
pub const LINK_COUNT: usize = TrophicLevel::COUNT - 1;

/// Coefficients of one predator/prey link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrophicLink {
    /// Mass-action consumption coefficient (per donor, per consumer, per second).
    pub uptake: f64,
    /// Fraction of consumed biomass converted into consumer biomass.
    pub efficiency: f64,
}

impl TrophicLink {
    /// Create a link from its uptake coefficient and conversion efficiency.
    pub const fn new(uptake: f64, efficiency: f64) -> Self {
        Self { uptake, efficiency }
    }
}

/// Engine parameters. Treated as a value: edits replace the whole struct
/// between ticks, never during one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Simulated seconds per tick.
    pub dt: f64,
    /// Whether consumption flows are perturbed by a small random factor.
    pub noise_enabled: bool,
    /// Sunlight added per simulated second.
    pub solar_input: f64,
    /// Maximum sunlight that can be stored.
    pub sunlight_cap: f64,
    /// Extra grass mortality per grasshopper per second.
    pub grass_extra_death_coefficient: f64,
    /// Consumer links in trophic order: grass→hopper, hopper→frog,
    /// frog→snake, snake→eagle.
    pub links: [TrophicLink; LINK_COUNT],
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: 0.1,
            noise_enabled: false,
            solar_input: 50.0,
            sunlight_cap: 500.0,
            grass_extra_death_coefficient: 0.0005,
            links: [
                TrophicLink::new(0.006, 0.20),
                TrophicLink::new(0.004, 0.18),
                TrophicLink::new(0.003, 0.16),
                TrophicLink::new(0.002, 0.14),
            ],
        }
    }
}

impl SimulationParams {
    /// Set the tick length in simulated seconds.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Enable or disable consumption noise.
    pub fn with_noise(mut self, enabled: bool) -> Self {
        self.noise_enabled = enabled;
        self
    }

    /// Set the sunlight inflow per simulated second.
    pub fn with_solar_input(mut self, solar_input: f64) -> Self {
        self.solar_input = solar_input;
        self
    }

    /// Set the sunlight storage cap.
    pub fn with_sunlight_cap(mut self, cap: f64) -> Self {
        self.sunlight_cap = cap;
        self
    }

    /// Replace the link feeding `consumer`. Grass has no incoming link and is ignored.
    pub fn with_link(mut self, consumer: TrophicLevel, link: TrophicLink) -> Self {
        if let Some(slot) = consumer.link_index() {
            self.links[slot] = link;
        }
        self
    }

    /// Set the grasshopper-driven grass mortality coefficient.
    pub fn with_grass_extra_death(mut self, coefficient: f64) -> Self {
        self.grass_extra_death_coefficient = coefficient;
        self
    }

    /// The link through which `consumer` feeds, or `None` for grass.
    pub fn link_into(&self, consumer: TrophicLevel) -> Option<TrophicLink> {
        consumer.link_index().map(|slot| self.links[slot])
    }

    /// Check value ranges once at construction time.
    ///
    /// A zero `sunlight_cap` is accepted: it stalls grass growth but the
    /// engine's epsilon guards keep every tick well defined.
    pub fn validate(&self) -> CoreResult<()> {
        positive("dt", self.dt)?;
        non_negative("solar_input", self.solar_input)?;
        non_negative("sunlight_cap", self.sunlight_cap)?;
        non_negative(
            "grass_extra_death_coefficient",
            self.grass_extra_death_coefficient,
        )?;
        for link in &self.links {
            non_negative("links.uptake", link.uptake)?;
            non_negative("links.efficiency", link.efficiency)?;
        }
        Ok(())
    }
}

/// Host-side pacing and display preferences. The engine never reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Wall-clock seconds slept between ticks.
    pub step_delay: f64,
    /// Whether the renderer should use color.
    pub use_color: bool,
}

impl HostSettings {
    /// Smallest permitted step delay.
    pub const MIN_STEP_DELAY: f64 = 0.0;
    /// Largest permitted step delay.
    pub const MAX_STEP_DELAY: f64 = 1.0;

    /// Set the step delay, clamped to the permitted range.
    pub fn with_step_delay(mut self, seconds: f64) -> Self {
        self.step_delay = seconds.clamp(Self::MIN_STEP_DELAY, Self::MAX_STEP_DELAY);
        self
    }

    /// Set the color preference.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Reject a step delay outside `[0, 1]`.
    pub fn validate(&self) -> CoreResult<()> {
        finite("step_delay", self.step_delay)?;
        if !(Self::MIN_STEP_DELAY..=Self::MAX_STEP_DELAY).contains(&self.step_delay) {
            return Err(CoreError::OutOfRange {
                name: "step_delay",
                value: self.step_delay,
                min: Self::MIN_STEP_DELAY,
                max: Self::MAX_STEP_DELAY,
            });
        }
        Ok(())
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            step_delay: 0.05,
            use_color: true,
        }
    }
}

fn finite(name: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> CoreResult<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> CoreResult<()> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_values() {
        let params = SimulationParams::default();
        assert!((params.dt - 0.1).abs() < f64::EPSILON);
        assert!(!params.noise_enabled);
        assert!((params.solar_input - 50.0).abs() < f64::EPSILON);
        assert!((params.sunlight_cap - 500.0).abs() < f64::EPSILON);
        assert_eq!(params.links[0], TrophicLink::new(0.006, 0.20));
        assert_eq!(params.links[3], TrophicLink::new(0.002, 0.14));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn params_builder_chain() {
        let params = SimulationParams::default()
            .with_dt(0.05)
            .with_noise(true)
            .with_solar_input(10.0)
            .with_sunlight_cap(100.0)
            .with_grass_extra_death(0.0);
        assert!((params.dt - 0.05).abs() < f64::EPSILON);
        assert!(params.noise_enabled);
        assert!((params.solar_input - 10.0).abs() < f64::EPSILON);
        assert!((params.sunlight_cap - 100.0).abs() < f64::EPSILON);
        assert_eq!(params.grass_extra_death_coefficient, 0.0);
    }

    #[test]
    fn link_lookup_by_consumer() {
        let params = SimulationParams::default()
            .with_link(TrophicLevel::Frog, TrophicLink::new(0.01, 0.5));
        assert_eq!(params.link_into(TrophicLevel::Grass), None);
        assert_eq!(
            params.link_into(TrophicLevel::Frog),
            Some(TrophicLink::new(0.01, 0.5))
        );
        assert_eq!(
            params.link_into(TrophicLevel::Eagle),
            Some(TrophicLink::new(0.002, 0.14))
        );
    }

    #[test]
    fn grass_link_edit_is_ignored() {
        let params = SimulationParams::default()
            .with_link(TrophicLevel::Grass, TrophicLink::new(9.0, 9.0));
        assert_eq!(params, SimulationParams::default());
    }

    #[test]
    fn validate_rejects_bad_dt() {
        let err = SimulationParams::default().with_dt(0.0).validate().unwrap_err();
        assert!(matches!(err, CoreError::NotPositive { name: "dt", .. }));

        let err = SimulationParams::default()
            .with_dt(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { name: "dt", .. }));
    }

    #[test]
    fn validate_rejects_negative_coefficients() {
        let params = SimulationParams::default()
            .with_link(TrophicLevel::Snake, TrophicLink::new(-0.1, 0.2));
        assert!(matches!(
            params.validate(),
            Err(CoreError::Negative {
                name: "links.uptake",
                ..
            })
        ));
    }

    #[test]
    fn zero_sunlight_cap_is_degenerate_but_valid() {
        assert!(SimulationParams::default()
            .with_sunlight_cap(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn host_settings_clamp_and_validate() {
        let host = HostSettings::default().with_step_delay(5.0);
        assert!((host.step_delay - 1.0).abs() < f64::EPSILON);
        assert!(host.validate().is_ok());

        let host = HostSettings {
            step_delay: -0.5,
            use_color: false,
        };
        assert!(matches!(
            host.validate(),
            Err(CoreError::OutOfRange {
                name: "step_delay",
                ..
            })
        ));
    }

    #[test]
    fn params_deserialize_with_missing_keys() {
        let params: SimulationParams =
            serde_json::from_str(r#"{ "dt": 0.2, "noise_enabled": true }"#).unwrap();
        assert!((params.dt - 0.2).abs() < f64::EPSILON);
        assert!(params.noise_enabled);
        assert_eq!(params.links, SimulationParams::default().links);
    }
}
