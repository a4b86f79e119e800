//! Throttled rate summaries: at most one line per five simulated seconds.

use std::fmt;

use ps_core::{SimulationState, Species, TrophicLevel};

/// Width of a logging window in simulated seconds.
pub const BUCKET_SECONDS: f64 = 5.0;

/// Absorbs the drift of repeatedly adding `dt` so a window boundary is not
/// missed by one tick (fifty additions of 0.1 land just below 5.0).
const BUCKET_TOLERANCE: f64 = 1e-9;

/// Index of the logging window containing `time`.
pub fn bucket_index(time: f64) -> i64 {
    (time / BUCKET_SECONDS + BUCKET_TOLERANCE).floor() as i64
}

/// The species leading one per-capita rate.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLeader {
    /// Level of the leading species.
    pub level: TrophicLevel,
    /// Display name of the leading species.
    pub name: String,
    /// Its per-capita rate per second.
    pub rate: f64,
}

/// Fastest-growing and fastest-dying species of a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSummary {
    /// Highest per-capita growth rate.
    pub growth: RateLeader,
    /// Highest per-capita death rate.
    pub death: RateLeader,
}

impl RateSummary {
    /// Pick the leaders among `species`. Ties go to the earliest level.
    pub fn from_species(species: &[Species; TrophicLevel::COUNT]) -> Self {
        Self {
            growth: leader(species, |s| s.diagnostics.per_capita_growth_rate),
            death: leader(species, |s| s.diagnostics.per_capita_death_rate),
        }
    }

    /// Render the summary as a log line stamped with `time`.
    pub fn line(&self, time: f64) -> String {
        format!("t={time:.1} {self}")
    }
}

impl fmt::Display for RateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "highest growth rate: {}: {:.2}. highest death rate {}: {:.2}",
            self.growth.name, self.growth.rate, self.death.name, self.death.rate
        )
    }
}

fn leader(species: &[Species], rate: impl Fn(&Species) -> f64) -> RateLeader {
    let mut best = &species[0];
    for candidate in &species[1..] {
        if rate(candidate) > rate(best) {
            best = candidate;
        }
    }
    RateLeader {
        level: best.level,
        name: best.name.clone(),
        rate: rate(best),
    }
}

/// Append a summary to `state.log` if the tick starting at `tick_start`
/// ends in a new window. Returns `true` if a line was written.
///
/// Must run after the tick's diagnostics are written and before
/// `simulated_time` advances.
pub fn record(state: &mut SimulationState, tick_start: f64, dt: f64) -> bool {
    let bucket = bucket_index(tick_start + dt);
    if bucket == state.last_log_bucket {
        return false;
    }
    let line = RateSummary::from_species(&state.species).line(tick_start);
    tracing::debug!(bucket, "{line}");
    state.log.push(line);
    state.last_log_bucket = bucket;
    true
}
