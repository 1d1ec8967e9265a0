//! Command-line driver: plays a batch of games and reports how the player did.
//!
//! ```text
//! minesweeper-ai [--games N] [--seed S] [--height H] [--width W] [--mines M]
//!                [--legacy-mine-rule] [--json] [--show-board]
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{bail, ensure, Context, Result};
use tracing_subscriber::EnvFilter;

use minesweeper_ai::{
    play_games, Board, BoardConfig, GameRng, GameSession, MineRule, Player, PlayerConfig,
    StepResult,
};

struct Args {
    games: u32,
    seed: u64,
    height: usize,
    width: usize,
    mines: usize,
    mine_rule: MineRule,
    json: bool,
    show_board: bool,
}

impl Default for Args {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            games: 100,
            seed: 42,
            height: board.height,
            width: board.width,
            mines: board.mine_count,
            mine_rule: MineRule::Exact,
            json: false,
            show_board: false,
        }
    }
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--games" => args.games = parse_value(&flag, iter.next())?,
            "--seed" => args.seed = parse_value(&flag, iter.next())?,
            "--height" => args.height = parse_value(&flag, iter.next())?,
            "--width" => args.width = parse_value(&flag, iter.next())?,
            "--mines" => args.mines = parse_value(&flag, iter.next())?,
            "--legacy-mine-rule" => args.mine_rule = MineRule::AnyNonZero,
            "--json" => args.json = true,
            "--show-board" => args.show_board = true,
            other => bail!("Unknown argument: {}", other),
        }
    }

    ensure!(args.height > 0 && args.width > 0, "Board must have at least 1 cell");
    ensure!(
        args.mines < args.height * args.width,
        "Too many mines ({}) for a {}x{} board",
        args.mines,
        args.height,
        args.width
    );

    Ok(args)
}

fn parse_value<T>(flag: &str, value: Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .with_context(|| format!("Invalid value for {}: {}", flag, value))
}

/// Play one game move by move, printing the board and every move.
fn show_game(board_config: &BoardConfig, player_config: PlayerConfig, seed: u64) {
    let mut rng = GameRng::new(seed).for_context("board");
    let board = Board::new(*board_config, &mut rng);
    println!("{}", board);

    let player = Player::new(board_config, player_config.with_seed(seed));
    let mut session = GameSession::new(board, player);

    loop {
        match session.step() {
            StepResult::Continue(mv) => println!("{} {:?}", mv.cell, mv.kind),
            StepResult::Finished(outcome) => {
                println!("{:?} after {} moves", outcome, session.moves().len());
                break;
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let board = BoardConfig::new(args.height, args.width, args.mines);
    let player = PlayerConfig::default().with_mine_rule(args.mine_rule);

    if args.show_board {
        show_game(&board, player, args.seed);
        return Ok(());
    }

    tracing::info!(
        games = args.games,
        height = board.height,
        width = board.width,
        mines = board.mine_count,
        rule = ?args.mine_rule,
        "playing"
    );
    let summary = play_games(&board, &player, args.games, args.seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "games: {}  wins: {}  losses: {}  exhausted: {}  win rate: {:.1}%",
            summary.games,
            summary.wins,
            summary.losses,
            summary.exhausted,
            summary.win_rate() * 100.0
        );
        println!(
            "moves: {}  guesses: {}  mines inferred: {}  sentences derived: {}",
            summary.moves,
            summary.guesses,
            summary.inference.mines_inferred,
            summary.inference.sentences_derived
        );
    }

    Ok(())
}
