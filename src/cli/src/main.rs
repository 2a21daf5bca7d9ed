#![warn(clippy::pedantic)]

mod config;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::{
    eyre::{WrapErr, eyre},
    owo_colors::OwoColorize,
};
use cube_core::{FaceletState, ScrambleGenerator, format_sequence, parse_sequence};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info, warn};

use crate::config::CubeConfig;

/// Scrambles, displays, and checks a 3x3x3 facelet cube
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// A TOML config file; defaults to facelet-cube/config.toml in the user
    /// config directory
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print flat strings, never the unfolded diagram
    #[arg(long)]
    no_diagram: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube, check the result, and print every step
    Demo {
        /// Number of moves in the scramble
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print random scrambles
    Scramble {
        /// Number of moves in each scramble
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for reproducible scrambles
        #[arg(short, long)]
        seed: Option<u64>,
        /// How many scrambles to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Apply a move sequence, e.g. "R U' F2"
    Apply {
        /// The moves to apply
        sequence: String,
        /// Start from this 54-character state instead of a solved cube
        #[arg(long)]
        state: Option<String>,
    },
    /// Check a 54-character cube state
    Validate {
        /// The state, one of U, L, F, R, B, D per facelet
        state: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = CubeConfig::load(cli.config.as_deref())?;
    if cli.no_diagram {
        config.show_diagram = false;
    }

    match cli.command {
        Commands::Demo { length, seed } => {
            if let Some(length) = length {
                config.scramble_length = length;
            }
            config.seed = seed.or(config.seed);
            run_demo(&config)
        }
        Commands::Scramble {
            length,
            seed,
            count,
        } => {
            let mut generator =
                scramble_generator(length.unwrap_or(config.scramble_length), seed.or(config.seed));
            for _ in 0..count {
                println!("{}", format_sequence(&generator.generate()));
            }
            Ok(())
        }
        Commands::Apply { sequence, state } => {
            let mut cube = match state {
                Some(state) => state
                    .parse::<FaceletState>()
                    .wrap_err("The starting state is not a legal cube")?,
                None => FaceletState::solved(),
            };
            let moves = parse_sequence(&sequence)?;
            cube.apply_all(&moves);

            print_state(&cube, &config);
            check_state(&cube)
        }
        Commands::Validate { state } => {
            let cube = state.parse::<FaceletState>()?;
            print_state(&cube, &config);
            check_state(&cube)
        }
    }
}

fn scramble_generator(length: usize, seed: Option<u64>) -> ScrambleGenerator {
    match seed {
        Some(seed) => {
            info!("Using scramble seed {seed}");
            ScrambleGenerator::with_seed(length, seed)
        }
        None => ScrambleGenerator::new(length),
    }
}

fn run_demo(config: &CubeConfig) -> color_eyre::Result<()> {
    let mut cube = FaceletState::solved();
    println!("Original cube state:");
    print_state(&cube, config);

    let scramble = scramble_generator(config.scramble_length, config.seed).generate();
    println!("\nScramble ({} moves):", scramble.len());
    println!("{}", format_sequence(&scramble));

    cube.apply_all(&scramble);
    println!("\nCube state after scrambling:");
    print_state(&cube, config);

    println!();
    check_state(&cube).wrap_err("Invalid cube state detected after scrambling")?;

    println!("\nFinal flat string:");
    println!("{cube}");

    Ok(())
}

fn print_state(cube: &FaceletState, config: &CubeConfig) {
    println!("{cube}");
    if config.show_diagram {
        println!("{}", cube.diagram());
    }
}

/// Reports color counts and center alignment. Only a bad color count is an
/// error; misaligned centers are worth a warning and nothing more.
fn check_state(cube: &FaceletState) -> color_eyre::Result<()> {
    if let Err(e) = cube.validate_color_counts() {
        eprintln!("{}", e.red());
        return Err(eyre!(e));
    }
    println!("{}", "Color counts are valid.".green());

    if cube.check_centers_aligned() {
        println!("{}", "Centers are correctly aligned.".green());
    } else {
        let faces = cube.misaligned_centers().iter().join(", ");
        warn!("Centers misaligned on {faces}");
        println!("{}", format!("Centers misaligned on {faces}.").yellow());
    }

    Ok(())
}
