//! Fixed-timestep engine for the PopSim food chain.
//!
//! [`engine::step`] is the pure per-tick transition over a
//! [`ps_core::SimulationState`]. [`command::apply_command`] performs the
//! discrete edits a host issues between ticks, and [`Simulation`] ties both
//! to a seeded noise source.

/// Discrete commands applied between ticks.
pub mod command;
/// Run configuration and TOML loading.
pub mod config;
/// The per-tick state transition.
pub mod engine;
/// Error types for the simulation crate.
pub mod error;
/// Throttled rate summaries.
pub mod logger;
/// Top-level simulation orchestrator.
pub mod simulation;

/// Re-exports of command types and step constants.
pub use command::{Command, POPULATION_STEP, RATE_STEP, STEP_DELAY_STEP, apply_command};
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of the transition functions and their flow report.
pub use engine::{LinkFlow, TickFlows, advance, step};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
