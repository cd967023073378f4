//! Battle CLI - Forecast a battle from a scenario file
//!
//! Loads item and mob catalogs (bundled by default), replays a scenario's
//! selections into a session, then prints the player's stats, the verdict
//! of one simulated battle and, when asked, a forecast over many runs.

use anyhow::{bail, Context, Result};
use battle_core::config::{default_catalogs, load_catalogs, load_scenario};
use battle_core::{Catalogs, EquipmentSlot, Session};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line options
#[derive(Debug, Default)]
struct CliConfig {
    scenario: Option<PathBuf>,
    catalogs: Option<PathBuf>,
    trials: Option<u32>,
    seed: Option<u64>,
    list: bool,
}

fn parse_args() -> Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = CliConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalogs" => {
                i += 1;
                let path = args.get(i).context("--catalogs requires a file")?;
                config.catalogs = Some(PathBuf::from(path));
            }
            "--trials" => {
                i += 1;
                let value = args.get(i).context("--trials requires a number")?;
                config.trials = Some(value.parse().context("--trials requires a number")?);
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).context("--seed requires a number")?;
                config.seed = Some(value.parse().context("--seed requires a number")?);
            }
            "--list" => config.list = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                print_usage();
                bail!("unknown argument: {other}");
            }
            path => {
                if config.scenario.is_some() {
                    bail!("only one scenario file can be given");
                }
                config.scenario = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn print_usage() {
    eprintln!(
        "Battle forecast\n\
         \n\
         Usage: battle_cli <SCENARIO> [OPTIONS]\n\
         \x20      battle_cli --list [--catalogs FILE]\n\
         \n\
         Options:\n\
         \x20 --catalogs FILE  Item and mob catalogs, TOML or JSON (default: bundled)\n\
         \x20 --trials N       Number of runs to forecast (overrides the scenario)\n\
         \x20 --seed N         RNG seed for reproducible runs (overrides the scenario)\n\
         \x20 --list           Print the selectable mobs, items and foods\n\
         \x20 --help, -h       Show this help"
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args()?;

    let catalogs = match cli.catalogs.as_deref() {
        Some(path) => load_catalogs(path)
            .with_context(|| format!("failed to load catalogs from {}", path.display()))?,
        None => default_catalogs(),
    };

    if cli.list {
        print_catalogs(&catalogs);
        return Ok(());
    }

    let Some(scenario_path) = cli.scenario.as_deref() else {
        print_usage();
        bail!("missing scenario file");
    };
    let scenario = load_scenario(scenario_path)
        .with_context(|| format!("failed to load scenario from {}", scenario_path.display()))?;

    let session = scenario.build_session(catalogs);
    let trials = cli.trials.or(scenario.trials);
    let seed = cli.seed.or(scenario.seed);

    tracing::info!(
        scenario = %scenario_path.display(),
        enemies = session.battlefield().len(),
        "scenario loaded"
    );

    print_session(&session);

    let outcome = match seed {
        Some(seed) => session.compute_outcome_seeded(seed),
        None => session.compute_outcome(),
    };
    tracing::info!(outcome = outcome.tag(), "battle simulated");
    println!();
    println!("{}", outcome);

    if let Some(trials) = trials {
        let forecast = match seed {
            Some(seed) => session.forecast_seeded(trials, seed),
            None => session.forecast(trials),
        };
        println!();
        println!(
            "Forecast over {} runs: {}",
            forecast.trials,
            forecast.summary()
        );
        println!("Most likely: {}", forecast.most_likely());
        if let Some(health) = forecast.mean_victory_health() {
            println!("Average health after a win: {:.0}%", health);
        }
    }

    Ok(())
}

fn print_session(session: &Session) {
    let loadout = session.loadout();
    println!("=== Loadout ===");
    for slot in EquipmentSlot::all() {
        if let Some(item) = loadout.equipped(*slot) {
            println!("  {:<8} {}", slot.as_str(), item);
        }
    }
    for food in loadout.foods() {
        println!("  {:<8} {}", "food", food);
    }

    let stats = session.player_stats();
    println!();
    println!("=== Player ===");
    println!("  Health:  {}", stats.health);
    println!("  Stamina: {}", stats.stamina);
    println!("  Armor:   {}", stats.armor);
    println!("  Damage:  {}", stats.damage);
    println!("  Skill:   {:.0}%", session.skill_level().value() * 100.0);

    let bias = session.combat_bias();
    println!("  Bias:    {} ({})", bias.label(), bias.describe());

    println!();
    println!("=== Battlefield ===");
    if session.battlefield().is_empty() {
        println!("  (empty)");
    }
    for enemy in session.battlefield().enemies() {
        println!(
            "  {:<4} {:<12} {:>4} HP  {:>3} dmg",
            enemy.id.to_string(),
            enemy.name,
            enemy.max_health,
            enemy.damage
        );
    }
}

fn print_catalogs(catalogs: &Catalogs) {
    println!("=== Mobs ===");
    for (name, mob) in &catalogs.mobs {
        println!("  {:<24} {:>4} HP  {:>3} dmg", name, mob.health, mob.damage);
    }

    for slot in EquipmentSlot::all() {
        println!();
        println!("=== {} ===", slot.as_str());
        for item in catalogs.items_for(*slot) {
            println!("  {}", item);
        }
    }

    println!();
    println!("=== food ===");
    for (name, food) in &catalogs.foods {
        println!(
            "  {:<24} +{} HP  +{} stamina",
            name, food.health, food.stamina
        );
    }
}
