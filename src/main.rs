mod cli;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::info;

use kingfall_chess::game_state::game_state::GameState;
use kingfall_chess::text_ui::text_top::run_stdio_loop;
use kingfall_chess::utils::fen_parser::{parse_placement, parse_side_to_move};
use kingfall_chess::utils::random_playout::run_playout_series;
use kingfall_chess::utils::save_game::load_game;

fn main() -> Result<(), String> {
    let env = Env::default().filter_or("CHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Commands::Play {
            load,
            position,
            side,
        }) => {
            let initial = match (load, position) {
                (Some(path), _) => {
                    let snapshot = load_game(&path)?;
                    info!("resuming game saved at {}", snapshot.saved_at);
                    snapshot.state
                }
                (None, Some(placement)) => {
                    let board = parse_placement(&placement)?;
                    let to_move = parse_side_to_move(&side)?;
                    GameState::from_position(board, to_move)
                }
                (None, None) => GameState::new_game(),
            };
            run_stdio_loop(initial).map_err(|e| format!("terminal I/O failed: {e}"))
        }
        Some(cli::Commands::Playout {
            games,
            seed,
            max_plies,
        }) => {
            let stats = run_playout_series(games, seed, max_plies)?;
            println!("{}", stats.report());
            Ok(())
        }
        None => cli::Cli::command()
            .print_help()
            .map_err(|e| format!("failed to print help: {e}")),
    }
}
