mod config;
mod game_ui;
mod input;
mod offline;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, TicTacToeGameState};
use common::{log, logger};

use config::{Config, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    show_scores: bool,

    /// Write diagnostics to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Seed for the random first-player choice
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match get_config_manager(args.config.as_deref()).get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}; using default settings", e);
            Config::default()
        }
    };

    if let Some(first_player) = args.first_player {
        config.tictactoe.first_player = first_player.into();
    }
    config.tictactoe.show_scores |= args.show_scores;

    if args.verbose || config.logging.enabled {
        let prefix = config
            .logging
            .prefix
            .clone()
            .or_else(|| args.use_log_prefix.then(|| "Client".to_string()));
        logger::init_logger(prefix);
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting game: first player {:?}, seed {}",
        config.tictactoe.first_player,
        rng.seed()
    );

    let mut state = TicTacToeGameState::new(config.tictactoe.first_player, &mut rng);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_tictactoe_game(&mut state, &mut stdin.lock(), &mut stdout.lock(), &config.tictactoe)?;

    Ok(())
}
