//! Proportional "ecosystem mix" bar: one cell per unit of width, split
//! between species by their share of total biomass.

use ps_core::{SimulationState, TrophicLevel};

/// Split `width` cells between `weights` by largest remainder. Negative
/// weights count as zero. The result always sums to `width`; leftover cells
/// go to the largest fractional parts, earliest first on ties.
pub fn allocate(weights: &[f64], width: usize) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }
    let total = weights.iter().map(|w| w.max(0.0)).sum::<f64>().max(1e-6);
    let exact: Vec<f64> = weights
        .iter()
        .map(|w| w.max(0.0) / total * width as f64)
        .collect();
    let mut counts: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();

    let mut assigned: usize = counts.iter().sum();
    while assigned > width {
        // Float rounding can only overshoot by a cell on the largest share.
        if let Some(max) = counts.iter_mut().max() {
            *max -= 1;
        }
        assigned -= 1;
    }
    while assigned < width {
        let mut best = 0;
        let mut best_fraction = f64::NEG_INFINITY;
        for (i, (e, c)) in exact.iter().zip(&counts).enumerate() {
            let fraction = e - *c as f64;
            if fraction > best_fraction {
                best = i;
                best_fraction = fraction;
            }
        }
        counts[best] += 1;
        assigned += 1;
    }
    counts
}

/// One row of the mix bar: the level owning each cell, in trophic order.
pub fn mix_row(state: &SimulationState, width: usize) -> Vec<TrophicLevel> {
    let weights: Vec<f64> = state.species.iter().map(|s| s.population).collect();
    allocate(&weights, width)
        .into_iter()
        .zip(TrophicLevel::ALL)
        .flat_map(|(count, level)| std::iter::repeat_n(level, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_sums_to_width() {
        for width in [0, 1, 7, 33, 120] {
            let counts = allocate(&[200.0, 60.0, 25.0, 12.0, 6.0], width);
            assert_eq!(counts.iter().sum::<usize>(), width);
        }
    }

    #[test]
    fn largest_remainder_wins() {
        // Exact shares 1.5, 1.5, 1.0 of 4 cells: the first tie takes the spare.
        assert_eq!(allocate(&[3.0, 3.0, 2.0], 4), vec![2, 1, 1]);
        assert_eq!(allocate(&[1.0, 0.0, 0.0], 5), vec![5, 0, 0]);
    }

    #[test]
    fn empty_population_still_fills_row() {
        assert_eq!(allocate(&[0.0; 5], 10), vec![2, 2, 2, 2, 2]);
        assert_eq!(allocate(&[0.0; 5], 7), vec![2, 2, 1, 1, 1]);
    }

    #[test]
    fn mix_row_is_ordered_by_level() {
        let state = SimulationState::initial();
        let row = mix_row(&state, 40);
        assert_eq!(row.len(), 40);
        assert_eq!(row[0], TrophicLevel::Grass);
        let mut indices: Vec<usize> = row.iter().map(|l| l.index()).collect();
        let sorted = {
            let mut s = indices.clone();
            s.sort_unstable();
            s
        };
        assert_eq!(indices, sorted);
        indices.dedup();
        assert!(indices.len() >= 3);
    }
}
