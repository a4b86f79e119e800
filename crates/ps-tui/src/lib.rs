//! Terminal front end for the PopSim food chain.
//!
//! Wraps a [`ps_simulation::Simulation`] in a crossterm/ratatui loop: keys map
//! to engine commands, every loop iteration advances one tick, and the frame
//! is redrawn at most every [`terminal::RENDER_INTERVAL`].

pub mod app;
pub mod history;
pub mod input;
pub mod mix;
pub mod shared;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::TuiApp;
pub use terminal::run;
