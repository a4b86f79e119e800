use std::path::Path;

pub fn run(config: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(config, None, false)?;
    let text = config.to_toml_string().map_err(|e| e.to_string())?;
    print!("{text}");
    Ok(())
}
