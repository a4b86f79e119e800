pub mod params;
pub mod simulate;
pub mod tui;

use std::path::Path;

use ps_simulation::SimConfig;

/// Load the configuration file if given, then apply command-line overrides.
fn load_config(path: Option<&Path>, seed: Option<u64>, noise: bool) -> Result<SimConfig, String> {
    let mut config = match path {
        Some(path) => SimConfig::load(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if noise {
        config = config.with_noise(true);
    }
    Ok(config)
}
