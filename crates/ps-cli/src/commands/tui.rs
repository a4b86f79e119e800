use std::path::Path;

use ps_simulation::Simulation;
use ps_tui::TuiApp;

pub fn run(config: Option<&Path>, seed: Option<u64>, noise: bool) -> Result<(), String> {
    let config = super::load_config(config, seed, noise)?;
    let sim = Simulation::new(config).map_err(|e| e.to_string())?;
    ps_tui::run(TuiApp::new(sim))
}
