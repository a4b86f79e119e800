//! Bounded total-biomass history for the trend sparkline.

/// Samples kept before trimming.
pub const HISTORY_LIMIT: usize = 1000;
/// Samples kept after trimming.
pub const HISTORY_TRIM_TO: usize = 800;

/// Total biomass per tick, newest last. Once more than [`HISTORY_LIMIT`]
/// samples accumulate, only the newest [`HISTORY_TRIM_TO`] are kept.
#[derive(Debug, Clone, Default)]
pub struct BiomassHistory {
    samples: Vec<f64>,
}

impl BiomassHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample.
    pub fn push(&mut self, biomass: f64) {
        self.samples.push(biomass);
        if self.samples.len() > HISTORY_LIMIT {
            let excess = self.samples.len() - HISTORY_TRIM_TO;
            self.samples.drain(..excess);
        }
    }

    /// All retained samples, oldest first.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The newest `width` samples rounded to whole units for a sparkline.
    pub fn tail_for_sparkline(&self, width: usize) -> Vec<u64> {
        let start = self.samples.len().saturating_sub(width);
        self.samples[start..]
            .iter()
            .map(|v| v.max(0.0).round() as u64)
            .collect()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Return `true` if no samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
