//! Line-oriented text front-end.
//!
//! Reads one command per line, forwards it to the engine and prints the
//! resulting state. This is a presentation adapter only: it owns the single
//! `GameState` and replaces it with whatever the engine returns.
//!
//! Commands: `show`, `status`, `click <sq>`, `select <sq>`,
//! `move <from> <to>`, `undo`, `reset`, `save <file>`, `load <file>`,
//! `help`, `quit`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::warn;

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::{ClickOutcome, GameState};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::render_game_state::render_game_state;
use crate::utils::save_game::{load_game, save_game};

const HELP_TEXT: &str = "commands: show | status | click <sq> | select <sq> | move <from> <to> | undo | reset | save <file> | load <file> | quit";

pub fn run_stdio_loop(initial: GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, initial)?;
    Ok(())
}

/// Drive the session from `input` until `quit` or end of input; returns the final state.
pub fn run_loop(input: impl BufRead, out: &mut impl Write, initial: GameState) -> io::Result<GameState> {
    let mut session = TextSession { game_state: initial };
    writeln!(out, "{}", render_game_state(&session.game_state))?;

    for line in input.lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(session.game_state)
}

struct TextSession {
    game_state: GameState,
}

impl TextSession {
    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "show" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                Ok(())
            }
            "status" => {
                writeln!(
                    out,
                    "{} to move, {}",
                    self.game_state.current_player, self.game_state.status
                )?;
                Ok(())
            }
            "click" => self.handle_click(&args, out),
            "select" => self.handle_select(&args, out),
            "move" => self.handle_move(&args, out),
            "undo" => match self.game_state.undo_last_move() {
                Ok(next) => {
                    self.game_state = next;
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                    Ok(())
                }
                Err(err) => Err(err.to_string()),
            },
            "reset" => {
                self.game_state.reset_game();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                Ok(())
            }
            "save" => match args.first() {
                Some(path) => save_game(&self.game_state, Path::new(path)).and_then(|()| {
                    writeln!(out, "saved to {path}").map_err(|e| e.to_string())
                }),
                None => Err("usage: save <file>".to_owned()),
            },
            "load" => match args.first() {
                Some(path) => load_game(Path::new(path)).and_then(|snapshot| {
                    self.game_state = snapshot.state;
                    writeln!(out, "loaded game saved at {}", snapshot.saved_at)
                        .and_then(|()| writeln!(out, "{}", render_game_state(&self.game_state)))
                        .map_err(|e| e.to_string())
                }),
                None => Err("usage: load <file>".to_owned()),
            },
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
                Ok(())
            }
            "quit" | "exit" => return Ok(true),
            _ => Err(format!("unknown command '{cmd}'; {HELP_TEXT}")),
        };

        if let Err(err) = result {
            warn!("command '{trimmed}' failed: {err}");
            writeln!(out, "error: {err}")?;
        }

        Ok(false)
    }

    fn handle_click(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let square = parse_square_arg(args, 0)?;
        match self.game_state.handle_square_click(square) {
            ClickOutcome::Moved(record) => {
                writeln!(
                    out,
                    "moved {} -> {}",
                    square_name(record.from),
                    square_name(record.to)
                )
                .map_err(|e| e.to_string())?;
            }
            ClickOutcome::Ignored => {
                writeln!(out, "nothing to select on {}", square_name(square))
                    .map_err(|e| e.to_string())?;
            }
            ClickOutcome::Selected(_) | ClickOutcome::Deselected => {}
        }
        writeln!(out, "{}", render_game_state(&self.game_state)).map_err(|e| e.to_string())
    }

    fn handle_select(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let square = parse_square_arg(args, 0)?;
        if let Some(selection) = self.game_state.select_square(square) {
            if selection.destinations.is_empty() {
                writeln!(out, "{} has no moves", square_name(square))
                    .map_err(|e| e.to_string())?;
            }
        }
        writeln!(out, "{}", render_game_state(&self.game_state)).map_err(|e| e.to_string())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let from = parse_square_arg(args, 0)?;
        let to = parse_square_arg(args, 1)?;
        let next = self
            .game_state
            .attempt_move(from, to)
            .map_err(|e| e.to_string())?;
        self.game_state = next;
        writeln!(out, "{}", render_game_state(&self.game_state)).map_err(|e| e.to_string())
    }
}

fn parse_square_arg(args: &[&str], idx: usize) -> Result<Square, String> {
    let name = args
        .get(idx)
        .ok_or_else(|| format!("missing square argument #{}", idx + 1))?;
    algebraic_to_square(name)
}

fn square_name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}

#[cfg(test)]
mod tests {
    use super::run_loop;
    use crate::game_state::chess_types::{Color, GameStatus, Square};
    use crate::game_state::game_state::GameState;

    fn run(script: &str, initial: GameState) -> (GameState, String) {
        let mut out = Vec::<u8>::new();
        let state = run_loop(script.as_bytes(), &mut out, initial).expect("loop should run");
        (state, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn move_and_undo_commands_drive_the_game() {
        let (state, text) = run("move e2 e4\nmove e7 e5\nundo\nstatus\nquit\n", GameState::new_game());
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_player, Color::Black);
        assert!(text.contains("Black to move, playing"));
    }

    #[test]
    fn illegal_moves_are_reported_without_changing_state() {
        let (state, text) = run("move a1 a3\nmove e2\nfly\n", GameState::new_game());
        assert_eq!(state, GameState::new_game());
        assert!(text.contains("error: piece on (7, 0) cannot move to (5, 0)"));
        assert!(text.contains("error: missing square argument #2"));
        assert!(text.contains("error: unknown command 'fly'"));
    }

    #[test]
    fn clicks_select_then_move() {
        let (state, text) = run("click g1\nclick f3\n", GameState::new_game());
        assert!(text.contains("moved g1 -> f3"));
        assert_eq!(state.board.piece_at(Square::new(5, 5)).map(|p| p.color), Some(Color::White));
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn save_then_load_round_trips_through_a_file() {
        let path = std::env::temp_dir()
            .join(format!("kingfall_text_top_{}.json", std::process::id()));
        let name = path.display().to_string();
        let script = format!("move e2 e4\nsave {name}\nreset\nload {name}\nquit\n");

        let (state, text) = run(&script, GameState::new_game());
        let _ = std::fs::remove_file(&path);

        assert!(text.contains(&format!("saved to {name}")));
        assert!(text.contains("loaded game saved at"));
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_player, Color::Black);
    }

    #[test]
    fn selecting_a_blocked_piece_reports_no_moves() {
        let (state, text) = run("select a1\n", GameState::new_game());
        assert!(text.contains("a1 has no moves"));
        assert_eq!(state.selection.map(|s| s.square), Some(Square::new(7, 0)));
    }
}
