type Result<T> = std::result::Result<T, anyhow::Error>;

mod cycle;
mod error;
mod fingerprint;
mod grid;
mod tilt;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    One,
    Two,
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Spin-cycle a platform of rolling rocks", long_about = None)]
struct Args {
    /// Grid file; read from stdin when omitted.
    input: Option<PathBuf>,
    #[arg(short, long, default_value_t = 1_000_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: u64,
    /// Give up looking for a repeated state after this many cycles.
    #[arg(short, long, default_value_t = 10_000, value_parser = clap::value_parser!(u64).range(1..))]
    max_steps: u64,
    #[arg(short, long, value_enum, default_value_t = Part::Both)]
    part: Part,
    #[arg(long)]
    print_grid: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn read_grid(input: Option<&PathBuf>) -> Result<Grid> {
    let buffer = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };
    Ok(Grid::from_string(&buffer)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let grid = read_grid(args.input.as_ref())?;
    log::info!(
        "Platform {}x{} with {} round rocks",
        grid.number_of_columns(),
        grid.number_of_rows(),
        grid.count(grid::Cell::Movable)
    );

    if args.part != Part::Two {
        let tilted = tilt::tilt_towards(grid.clone(), tilt::Direction::North);
        if args.print_grid {
            print!("{}", tilted);
        }
        println!("Total load after tilting north: {}", tilted.north_load());
    }

    if args.part != Part::One {
        let target = usize::try_from(args.cycles)?;
        let max_steps = usize::try_from(args.max_steps)?;
        let spun = cycle::fast_forward(grid, target, max_steps)?;
        if args.print_grid {
            print!("{}", spun);
        }
        println!(
            "Total load after {} cycles: {}",
            args.cycles,
            spun.north_load()
        );
    }

    Ok(())
}
