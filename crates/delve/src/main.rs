//! Dungeon generator command line
//!
//! Generates one dungeon and prints it as text, highest row first.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use delve_core::dungeon::{generate_rooms_and_corridors, Dungeon};
use delve_core::{GameRng, GeneratorOptions};

#[derive(Parser, Debug)]
#[command(name = "delve", about = "Generate a blob-room dungeon")]
struct Args {
    /// Options file with OPTIONS= lines
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (random if not given here or in the options file)
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Number of corridor attempts
    #[arg(long)]
    corridors: Option<i32>,

    /// Print generation statistics as JSON
    #[arg(long)]
    stats: bool,

    /// Do not print the map
    #[arg(long)]
    no_map: bool,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let options = load_options(&args)?;
    let mut rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let mut dungeon = Dungeon::new(options.width, options.height);
    let stats = generate_rooms_and_corridors(&mut dungeon, &options, &mut rng);

    if !args.no_map {
        print!("{}", dungeon.to_ascii());
    }
    if args.stats {
        let mut report = serde_json::to_value(&stats)?;
        report["seed"] = rng.seed().into();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Options file first, then command-line overrides
fn load_options(args: &Args) -> anyhow::Result<GeneratorOptions> {
    let mut options = match &args.config {
        Some(path) => GeneratorOptions::load_from_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => GeneratorOptions::default(),
    };

    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if let Some(corridors) = args.corridors {
        options.corridor_attempts = corridors;
    }

    options.validate()?;
    Ok(options)
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Trace, Warn};
    let level = match verbose {
        0 => Warn,
        1 => Info,
        2 => Debug,
        _ => Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_target_level(simplelog::LevelFilter::Off)
            .set_location_level(simplelog::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
