//! Core types for PopSim: the five-level food chain's species records,
//! engine parameters and the simulation snapshot.
//!
//! This crate holds data only. The per-tick transition lives in
//! `ps-simulation`; the terminal host lives in `ps-tui`.

/// Validation errors for parameters and settings.
pub mod error;
/// Bounded log of rate summaries.
pub mod log;
/// Engine parameters and host settings.
pub mod params;
/// Trophic levels and species records.
pub mod species;
/// The simulation snapshot.
pub mod state;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the rate log.
pub use log::{RATE_LOG_CAPACITY, RateLog};
/// Re-export parameter types.
pub use params::{HostSettings, LINK_COUNT, SimulationParams, TrophicLink};
/// Re-export species types.
pub use species::{Species, TickDiagnostics, TrophicLevel};
/// Re-export the snapshot type.
pub use state::{INITIAL_SUNLIGHT, SimulationState};
