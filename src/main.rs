use std::io;

use clap::{Parser, ValueEnum};

use checkers_engine::agent::ai::Difficulty;
use checkers_engine::agent::human_player::{render_outcome, HumanPlayer};
use checkers_engine::agent::player::Player;
use checkers_engine::game_repr::Side;
use checkers_engine::menu::GameConfig;
use checkers_engine::orchestrator::Orchestrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans sharing the terminal
    Pvp,
    /// Human against the computer
    Pvai,
    /// Computer against itself
    Aivai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    Red,
    Black,
}

/// Play checkers in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Pvai)]
    mode: Mode,

    /// AI level for PvAI games (Easy, Medium or Hard)
    #[arg(long, default_value = "Medium")]
    level: String,

    /// Red AI level for AIvAI games
    #[arg(long, default_value = "Medium")]
    red_level: String,

    /// Black AI level for AIvAI games
    #[arg(long, default_value = "Medium")]
    black_level: String,

    /// Side the human plays in PvAI games. Red moves first.
    #[arg(long, value_enum, default_value_t = HumanSide::Red)]
    human_side: HumanSide,

    /// Seed for the AI random sources
    #[arg(long)]
    seed: Option<u64>,

    /// Declare a draw after this many turns
    #[arg(long)]
    max_plies: Option<u32>,
}

/// Resolve a level name, warning when it falls back to Medium
fn level(name: &str) -> Difficulty {
    Difficulty::parse(name).unwrap_or_else(|| {
        log::warn!("Unknown level {:?}, playing Medium", name);
        Difficulty::default()
    })
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = match self.mode {
            Mode::Pvp => GameConfig::pvp(),
            Mode::Pvai => {
                let side = match self.human_side {
                    HumanSide::Red => Side::Red,
                    HumanSide::Black => Side::Black,
                };
                GameConfig::pvai(side, level(&self.level))
            }
            Mode::Aivai => GameConfig::aivai(
                level(&self.red_level),
                level(&self.black_level),
            ),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_plies) = self.max_plies {
            config = config.with_max_plies(max_plies);
        }
        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let mut game = Orchestrator::from_config(&config, |side| -> Box<dyn Player> {
        let name = match side {
            Side::Red => "Player 1",
            Side::Black => "Player 2",
        };
        // Stdin buffers internally; a one-byte reader lets two humans share it
        Box::new(HumanPlayer::new(
            io::BufReader::with_capacity(1, io::stdin()),
            io::stdout(),
            name.to_string(),
        ))
    });

    let result = game.run();

    print!("{}", render_outcome(game.position(), result, game.plies()));
}
