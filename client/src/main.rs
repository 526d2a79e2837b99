mod config;
mod game_ui;
mod input;
mod offline;

use std::io;
use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{
    FirstPlayerMode, HUMAN_MARK, PruningMode, TicTacToeGameState, TicTacToeSettings,
};
use common::logger::{self, LogLevel};
use common::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Bot,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Bot => FirstPlayerMode::Bot,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an alpha-beta search bot")]
struct Args {
    /// YAML config file; defaults to tictactoe_client_config.yaml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth limit (1-9)
    #[arg(long)]
    max_depth: Option<usize>,

    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// Cut off a whole node on a pruning condition instead of only the current row
    #[arg(long)]
    full_pruning: bool,

    /// Do not wait for Enter before the bot moves
    #[arg(long)]
    no_pause: bool,

    /// Seed for the random first-player choice
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log search statistics for every bot move
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, mut settings: TicTacToeSettings) -> TicTacToeSettings {
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(first) = self.first {
            settings.first_player = first.into();
        }
        if self.full_pruning {
            settings.pruning = PruningMode::Full;
        }
        if self.no_pause {
            settings.pause_before_bot = false;
        }
        settings
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::get_config_manager(args.config.clone()).get_config()?;
    let settings = args.apply(config.tictactoe.clone());
    settings.validate()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut state = TicTacToeGameState::with_first_player(settings.first_player, &mut rng);

    log!(
        "New game: {} moves first, depth {}, {:?} pruning, seed {}",
        if state.current_mark == HUMAN_MARK { "human" } else { "bot" },
        settings.max_depth,
        settings.pruning,
        rng.seed()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    offline::run_tictactoe_game(&mut input, &mut output, &mut state, &settings)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_file_settings() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();
        let file_settings = TicTacToeSettings {
            max_depth: 5,
            ..TicTacToeSettings::default()
        };

        assert_eq!(args.apply(file_settings.clone()), file_settings);
    }

    #[test]
    fn test_flags_override_file_settings() {
        let args = Args::try_parse_from([
            "tictactoe",
            "--max-depth",
            "3",
            "--first",
            "random",
            "--full-pruning",
            "--no-pause",
        ])
        .unwrap();

        let settings = args.apply(TicTacToeSettings::default());

        assert_eq!(settings.max_depth, 3);
        assert_eq!(settings.first_player, FirstPlayerMode::Random);
        assert_eq!(settings.pruning, PruningMode::Full);
        assert!(!settings.pause_before_bot);
    }

    #[test]
    fn test_out_of_range_depth_fails_validation() {
        let args = Args::try_parse_from(["tictactoe", "--max-depth", "12"]).unwrap();

        let settings = args.apply(TicTacToeSettings::default());

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_first_player_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe", "--first", "nobody"]).is_err());
    }
}
