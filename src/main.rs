//! Genesys Dice - Command line entry point
//!
//! Rolls a dice pool given as short codes, or prints its exact outcome
//! table and success rate.

use std::path::PathBuf;

use clap::Parser;
use genesys_dice::core::error::Result;
use genesys_dice::core::RollerConfig;
use genesys_dice::dice::catalog::{face_table, max_face_count};
use genesys_dice::effects::{load_effects, AdditionalEffect, EffectRegistry};
use genesys_dice::probability::{enumerate_with, Distribution, EnumerationOptions};
use genesys_dice::resolution::{RollResult, SymbolTotals, Verdict};
use genesys_dice::DicePool;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Dice roller and probability calculator for the Genesys RPG system
///
/// Short codes: P Proficiency, A Ability, B Boost, C Challenge,
/// D Difficulty, S Setback, % Percentile.
/// 1 Proficiency and 2 Ability against 2 Difficulty is: PAADD
#[derive(Parser, Debug)]
#[command(name = "genesys-dice")]
struct Args {
    /// Dice pool as short codes
    #[arg(required_unless_present_any = ["faces", "list_effects"])]
    dice: Option<String>,

    /// Print the details of the roll
    #[arg(short = 'd')]
    details: bool,

    /// Print all outcomes with probabilities
    #[arg(short = 't')]
    table: bool,

    /// Print the success rate of the pool
    #[arg(short = 's')]
    success: bool,

    /// Print the faces of the dice
    #[arg(short = 'f')]
    faces: bool,

    /// Apply an effect given as a difficulty string, e.g. "-AA" (repeatable)
    #[arg(long = "effect", allow_hyphen_values = true)]
    effects: Vec<String>,

    /// Apply a named option from the effects catalog (repeatable)
    #[arg(long = "use")]
    use_effects: Vec<String>,

    /// List the effects catalog
    #[arg(long)]
    list_effects: bool,

    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RollOutput {
    dice: String,
    result: String,
    verdict: Verdict,
    totals: SymbolTotals,
    percentile: Vec<u8>,
    details: Vec<DieOutput>,
}

#[derive(Serialize)]
struct DieOutput {
    die: String,
    faces: Vec<String>,
}

impl RollOutput {
    fn new(pool: &DicePool, result: &RollResult) -> Self {
        Self {
            dice: pool.roll_str(),
            result: result.to_string(),
            verdict: result.verdict(),
            totals: *result.totals(),
            percentile: result.percentile().to_vec(),
            details: result
                .details()
                .iter()
                .map(|(kind, faces)| DieOutput {
                    die: kind.name().to_string(),
                    faces: faces.iter().map(|f| f.to_string()).collect(),
                })
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RollerConfig::load(path)?,
        None => RollerConfig::default(),
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = match &config.effects_path {
        Some(path) => load_effects(path)?,
        None => EffectRegistry::new(),
    };

    if args.faces {
        print_faces();
        return Ok(());
    }

    if args.list_effects {
        print_effects(&registry);
        return Ok(());
    }

    let mut pool = DicePool::parse(args.dice.as_deref().unwrap_or_default())?;

    for difficulty in &args.effects {
        pool.add_effect(AdditionalEffect::new(difficulty.as_str(), "", difficulty.as_str())?);
    }

    for name in &args.use_effects {
        pool.add_effect(registry.find_option(name)?.clone());
    }

    if args.table || args.success {
        let options = EnumerationOptions::new().with_limit(config.max_combinations);
        let distribution = enumerate_with(&pool, &options)?;

        if args.table {
            print_table(&pool, &distribution, args.json)?;
        } else if args.json {
            println!("{}", serde_json::to_string_pretty(&distribution.success_rate)?);
        } else {
            println!("Success rate for {} is {}%", pool, distribution.success_rate);
        }
        return Ok(());
    }

    let result = match args.seed.or(config.seed) {
        Some(seed) => {
            tracing::debug!("Rolling {} with seed {}", pool, seed);
            pool.roll(&mut ChaCha8Rng::seed_from_u64(seed))?
        }
        None => pool.roll(&mut rand::thread_rng())?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&RollOutput::new(&pool, &result))?);
    } else {
        if args.details {
            println!("{}", result.details_str());
        }
        println!("{}", result);
    }

    Ok(())
}

fn print_table(pool: &DicePool, distribution: &Distribution, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(distribution)?);
        return Ok(());
    }

    let width = distribution
        .outcomes
        .iter()
        .map(|o| o.key.chars().count())
        .max()
        .unwrap_or(0)
        .max("Success Rate".len());

    println!(
        "Results for dice {} ({} outcomes, {} combinations)",
        pool,
        distribution.outcomes.len(),
        distribution.combinations
    );
    println!("{:>width$}  {:>6}", "Result", "%", width = width);
    for (key, percent) in distribution.percentages() {
        let pad = width - key.chars().count();
        println!("{}{}  {:>6.2}", " ".repeat(pad), key, percent);
    }
    println!(
        "{:>width$}  {:>6.2}%",
        "Success Rate",
        distribution.success_rate,
        width = width
    );

    Ok(())
}

fn print_faces() {
    let columns: Vec<String> = (1..=max_face_count()).map(|i| i.to_string()).collect();
    println!("{:<12} {}", "Die", columns.join(" | "));
    for row in face_table() {
        println!("{:<12} {}", row.die.name(), row.faces.join(" | "));
    }
}

fn print_effects(registry: &EffectRegistry) {
    if registry.is_empty() {
        println!("No effects catalog configured");
        return;
    }

    for group in registry.groups() {
        println!("{}", group.name);
        let width = group.max_difficulty_len();
        for option in &group.options {
            println!(
                "  {:>width$}  {}: {}",
                option.difficulty,
                option.name,
                option.description,
                width = width
            );
        }
    }
}
