use docopt::Docopt;
use log::{info, Level};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use lifegrid::{
    cells::Cartesian2DCoordinate,
    config::LifeConfig,
    grid::Grid,
    patterns,
    region::ChangeRegion,
    scheduler::Stepper,
};
use std::sync::{mpsc, Arc, Mutex};

const USAGE: &str = "Life

Usage:
    life_driver -h | --help
    life_driver [--width=<w> --height=<h>] [--interval=<ms>] [--generations=<n>] [--seed=<s> | --pattern=<name>] [--quiet] [--verbose]

Options:
    -h --help              Show this screen.
    --width=<w>            The grid width in a w*h grid [default: 10].
    --height=<h>           The grid height in a w*h grid [default: 10].
    --interval=<ms>        Milliseconds between generations, 0 runs them back to back [default: 33].
    --generations=<n>      Number of generations to run before stopping [default: 10].
    --seed=<s>             Seed the random starting board so that runs are reproducible.
    --pattern=<name>       Start from a named pattern centred on the board instead of a random board.
                           One of: blinker, toad, beacon, glider, r-pentomino.
    --quiet                Only print the changed region of each generation, not the board.
    --verbose              Log grid rebuilds and timer activity.
";
#[derive(Debug, Deserialize)]
struct LifeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_interval: u64,
    flag_generations: usize,
    flag_seed: Option<u64>,
    flag_pattern: Option<String>,
    flag_quiet: bool,
    flag_verbose: bool,
}

// Driver errors. Library errors are linked in so `?` works on grid operations.
mod errors {
    #![allow(deprecated)]

    use error_chain::*;
    error_chain! {

        links {
            Life(::lifegrid::errors::Error, ::lifegrid::errors::ErrorKind);
        }

        foreign_links {
            LoggerFailure(::log::SetLoggerError);
        }

        errors {
            UnknownPattern(name: String) {
                description("unknown pattern")
                display("unknown pattern '{}'", name)
            }
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: LifeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let log_level = if args.flag_verbose { Level::Debug } else { Level::Info };
    simple_logger::init_with_level(log_level)?;

    let config = LifeConfig {
        width: args.flag_width,
        height: args.flag_height,
        step_interval_millis: args.flag_interval,
    };
    let mut grid = config.build_grid()
        .chain_err(|| format!("Failed to build a {}x{} grid", config.width, config.height))?;

    let seeded = seed_grid(&mut grid, &args)?;
    info!("Seeded {} live cells, {}", grid.alive_count(), seeded);
    if !args.flag_quiet {
        print!("{}", grid);
    }

    run_generations(grid, &config, args.flag_generations, args.flag_quiet)
}

fn seed_grid(grid: &mut Grid, args: &LifeArgs) -> Result<ChangeRegion> {

    if let Some(ref name) = args.flag_pattern {

        let pattern = patterns::find_pattern(name)
            .ok_or_else(|| ErrorKind::UnknownPattern(name.clone()))?;

        // Centre the pattern, or pin it to the top left if the board is smaller.
        let (pattern_width, pattern_height) = pattern.extent();
        let origin = Cartesian2DCoordinate::new(
            (grid.width().0 as u32).saturating_sub(pattern_width) / 2,
            (grid.height().0 as u32).saturating_sub(pattern_height) / 2);

        let region = grid.place_pattern(pattern, origin)
            .chain_err(|| format!("Pattern {} does not fit on the grid", pattern.name))?;
        Ok(region)

    } else if let Some(seed) = args.flag_seed {
        Ok(grid.randomize(&mut XorShiftRng::seed_from_u64(seed)))
    } else {
        Ok(grid.randomize(&mut rand::thread_rng()))
    }
}

/// Step the grid on a timer, printing each generation until `generations` have run or the
/// board stops changing.
fn run_generations(grid: Grid,
                   config: &LifeConfig,
                   generations: usize,
                   quiet: bool)
                   -> Result<()> {

    if generations == 0 {
        return Ok(());
    }

    let shared_grid = Arc::new(Mutex::new(grid));
    let (sender, receiver) = mpsc::channel();

    let mut stepper = Stepper::new(config.step_interval());
    stepper.start(shared_grid.clone(), move |grid, region| {
        let board = if quiet { None } else { Some(grid.to_string()) };
        let _ = sender.send((grid.generation(), region, board));
    });

    for (generation, region, board) in receiver.iter().take(generations) {
        println!("Generation {}: {}", generation, region);
        if let Some(board) = board {
            print!("{}", board);
        }
        if region.is_empty() {
            info!("Board is stable after {} generations", generation);
            break;
        }
    }
    stepper.stop();

    let grid = shared_grid.lock().map_err(|_| "Grid lock poisoned while stepping")?;
    info!("Stopped at generation {} with {} live cells", grid.generation(), grid.alive_count());

    Ok(())
}
