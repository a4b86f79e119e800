use std::path::Path;

use colored::{Color, Colorize};
use comfy_table::{Cell, ContentArrangement, Table};

use ps_core::{SimulationState, TrophicLevel};
use ps_simulation::Simulation;

pub fn run(
    config: Option<&Path>,
    ticks: u64,
    seed: Option<u64>,
    noise: bool,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let config = super::load_config(config, seed, noise)?;
    let mut sim = Simulation::new(config).map_err(|e| e.to_string())?;

    if verbose && !json {
        println!("  {}", "Rate Summaries".bold().underline());
    }
    for _ in 0..ticks {
        let bucket = sim.state().last_log_bucket;
        sim.tick();
        if verbose
            && !json
            && sim.state().last_log_bucket != bucket
            && let Some(line) = sim.state().log.last()
        {
            println!("  {}", line.dimmed());
        }
    }
    if verbose && !json {
        println!();
    }
    tracing::info!(
        ticks,
        time = sim.state().simulated_time,
        biomass = sim.state().total_biomass(),
        "headless run finished"
    );

    if json {
        let text = serde_json::to_string_pretty(sim.state())
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let state = sim.state();
    let params = sim.params();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({ticks} ticks, seed={}, noise={})",
            sim.seed(),
            if params.noise_enabled { "on" } else { "off" }
        )
        .dimmed()
    );
    println!(
        "  Simulated time: {:.1}s   Sunlight: {:.1} / {:.0}   Total biomass: {:.1}",
        state.simulated_time,
        state.sunlight,
        params.sunlight_cap,
        state.total_biomass()
    );
    println!();

    println!("  {}", "Species".bold().underline());
    println!();
    println!("{}", species_table(state, sim.host().use_color));
    println!();

    if !verbose {
        println!("  {}", "Rate Log".bold().underline());
        if state.log.is_empty() {
            println!("  {}", "(no summaries yet)".dimmed());
        }
        for line in state.log.iter() {
            println!("  {line}");
        }
        println!();
    }

    Ok(())
}

fn species_table(state: &SimulationState, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Species",
        "Population",
        "Growth",
        "Death",
        "gRate",
        "dRate",
        "Last +",
        "Last -",
    ]);

    for species in &state.species {
        let name = if use_color {
            species.name.color(level_color(species.level)).to_string()
        } else {
            species.name.clone()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.3}", species.population)),
            Cell::new(format!("{:.2}", species.growth_rate)),
            Cell::new(format!("{:.2}", species.death_rate)),
            Cell::new(format!("{:.3}", species.diagnostics.per_capita_growth_rate)),
            Cell::new(format!("{:.3}", species.diagnostics.per_capita_death_rate)),
            Cell::new(format!("{:.3}", species.diagnostics.gross_growth)),
            Cell::new(format!("{:.3}", species.diagnostics.gross_death)),
        ]);
    }
    table
}

fn level_color(level: TrophicLevel) -> Color {
    match level {
        TrophicLevel::Grass => Color::Green,
        TrophicLevel::Grasshopper => Color::Yellow,
        TrophicLevel::Frog => Color::Blue,
        TrophicLevel::Snake => Color::Red,
        TrophicLevel::Eagle => Color::White,
    }
}
