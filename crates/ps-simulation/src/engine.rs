//! The per-tick state transition.
//!
//! Flows are evaluated strictly in trophic order: sunlight feeds grass, then
//! each consumer eats the level below it. Every flow reads populations as
//! they stood at the start of the tick; all deltas are applied together at
//! the end and floored at zero.

use rand::Rng;

use ps_core::{LINK_COUNT, SimulationParams, SimulationState, TrophicLevel};

use crate::logger;

/// Floor applied to divisors (`dt`, `sunlight_cap`).
pub const EPSILON: f64 = 1e-6;
/// Lower bound of the consumption noise factor.
pub const NOISE_MIN: f64 = 0.98;
/// Upper bound of the consumption noise factor.
pub const NOISE_MAX: f64 = 1.02;

/// Biomass moved across one predator/prey link during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkFlow {
    /// The eating level.
    pub consumer: TrophicLevel,
    /// Donor population at the start of the link.
    pub donor_population: f64,
    /// Biomass removed from the donor; never exceeds `donor_population`.
    pub intake: f64,
}

/// What happened during one tick, beyond the resulting state.
#[derive(Debug, Clone, PartialEq)]
pub struct TickFlows {
    /// Multiplier applied to every consumption flow.
    pub noise: f64,
    /// Sunlight added before grass uptake, after capping.
    pub sunlight_inflow: f64,
    /// Sunlight converted into grass.
    pub grass_uptake: f64,
    /// Consumer links in trophic order.
    pub links: [LinkFlow; LINK_COUNT],
}

/// Draw this tick's consumption multiplier.
pub fn noise_factor<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> f64 {
    if params.noise_enabled {
        rng.random_range(NOISE_MIN..=NOISE_MAX)
    } else {
        1.0
    }
}

/// Advance `state` by one tick of `params.dt`.
///
/// `rng` is only consulted when noise is enabled, so a run without noise is
/// fully determined by its inputs.
pub fn step<R: Rng + ?Sized>(
    state: &SimulationState,
    params: &SimulationParams,
    rng: &mut R,
) -> SimulationState {
    advance(state, params, rng).0
}

/// Like [`step`], also reporting the flows computed along the way.
pub fn advance<R: Rng + ?Sized>(
    state: &SimulationState,
    params: &SimulationParams,
    rng: &mut R,
) -> (SimulationState, TickFlows) {
    let dt = params.dt;
    let noise = noise_factor(params, rng);
    let population = state.species.each_ref().map(|s| s.population);

    let mut growth = [0.0; TrophicLevel::COUNT];
    let mut death = [0.0; TrophicLevel::COUNT];
    let mut delta = [0.0; TrophicLevel::COUNT];

    // Sunlight inflow, then grass uptake.
    let sunlight = (state.sunlight + params.solar_input * dt).min(params.sunlight_cap);
    let sunlight_inflow = sunlight - state.sunlight;
    let sunlight_level = (sunlight / params.sunlight_cap.max(EPSILON)).clamp(0.0, 1.0);

    let grass = TrophicLevel::Grass.index();
    let hopper = TrophicLevel::Grasshopper.index();
    let grass_record = &state.species[grass];

    let grass_uptake =
        (grass_record.growth_rate * sunlight_level * population[grass] * dt).min(sunlight);
    let natural_death = grass_record.death_rate * population[grass] * dt;
    let hopper_pressure = params.grass_extra_death_coefficient * population[hopper] * dt;

    growth[grass] = grass_uptake;
    death[grass] = population[grass].min(natural_death + hopper_pressure);
    delta[grass] = growth[grass] - death[grass];

    // Each consumer eats the level directly below it.
    let mut links = [LinkFlow {
        consumer: TrophicLevel::Grasshopper,
        donor_population: 0.0,
        intake: 0.0,
    }; LINK_COUNT];

    for (slot, link) in params.links.iter().enumerate() {
        let donor = slot;
        let consumer = slot + 1;

        let intake = (link.uptake * population[donor] * population[consumer] * noise * dt)
            .min(population[donor]);
        delta[donor] -= intake;

        growth[consumer] = link.efficiency * intake;
        death[consumer] = state.species[consumer].death_rate * population[consumer] * dt;
        delta[consumer] = growth[consumer] - death[consumer];

        links[slot] = LinkFlow {
            consumer: TrophicLevel::ALL[consumer],
            donor_population: population[donor],
            intake,
        };
    }

    let mut next = state.clone();
    next.sunlight = (sunlight - grass_uptake).max(0.0);

    let rate_divisor = dt.max(EPSILON);
    for (i, species) in next.species.iter_mut().enumerate() {
        species.population = (population[i] + delta[i]).max(0.0);
        let headcount = species.population.max(1.0);
        species.diagnostics.gross_growth = growth[i];
        species.diagnostics.gross_death = death[i];
        species.diagnostics.per_capita_growth_rate = growth[i] / headcount / rate_divisor;
        species.diagnostics.per_capita_death_rate = death[i] / headcount / rate_divisor;
    }

    logger::record(&mut next, state.simulated_time, dt);
    next.simulated_time = state.simulated_time + dt;

    tracing::trace!(
        time = next.simulated_time,
        noise,
        sunlight = next.sunlight,
        biomass = next.total_biomass(),
        "tick"
    );

    let flows = TickFlows {
        noise,
        sunlight_inflow,
        grass_uptake,
        links,
    };
    (next, flows)
}
