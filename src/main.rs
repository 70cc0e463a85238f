//! Grid Snake entry point
//!
//! Usage: `grid-snake [config.json] [seed]`

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use grid_snake::app::App;
use grid_snake::config::GridConfig;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config_path = args.first().map(PathBuf::from);
    let seed = match args.get(1) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("seed must be an unsigned integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        // Fresh seed per run; pass one to replay a game
        None => rand::random(),
    };

    let grid = match GridConfig::load(config_path.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "starting {}x{} board, unit {}, seed {seed}",
        grid.board_width,
        grid.board_height,
        grid.unit
    );

    if let Err(err) = App::new(grid, seed).run() {
        eprintln!("terminal error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
