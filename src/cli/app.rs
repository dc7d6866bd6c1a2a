use crate::chess::{
    CastleSide, ChessError, GameSession, GameStatus, MoveOutcome, PieceType, Square,
};
use crate::cli::display::{display_board, display_captured};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::error;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    },
    Castle(CastleSide),
    Reset,
    History,
    Quit,
}

/// Parse a line of input.
///
/// Accepts `e2e4`, `e2 to e4`, `e7e8q` for promotion, `O-O`/`O-O-O` for
/// castling, and the `reset`, `history`, and `quit` commands.
pub fn parse_command(input: &str) -> Result<Command, ChessError> {
    let normalized = input.trim().to_lowercase().replace(" to ", "");

    match normalized.as_str() {
        "quit" | "exit" => return Ok(Command::Quit),
        "reset" => return Ok(Command::Reset),
        "history" | "moves" => return Ok(Command::History),
        "o-o" | "0-0" => return Ok(Command::Castle(CastleSide::Kingside)),
        "o-o-o" | "0-0-0" => return Ok(Command::Castle(CastleSide::Queenside)),
        _ => {}
    }

    // Byte slicing below is only safe on ASCII; anything else is malformed
    if normalized.is_ascii() && (normalized.len() == 4 || normalized.len() == 5) {
        let from: Square = normalized[0..2].parse()?;
        let to: Square = normalized[2..4].parse()?;
        let promotion = if normalized.len() == 5 {
            Some(normalized[4..5].parse::<PieceType>()?)
        } else {
            None
        };
        return Ok(Command::Move {
            from,
            to,
            promotion,
        });
    }

    Err(ChessError::InvalidSquare(format!(
        "unrecognized input '{}', expected e.g. 'e2e4', 'e7e8q', 'O-O', or 'reset'",
        input.trim()
    )))
}

/// The interactive terminal loop: print the position, prompt the side to
/// move, submit the parsed move to the session, and report the result.
pub struct App {
    session: GameSession,
    ascii: bool,
    json: bool,
}

impl App {
    pub fn new(ascii: bool, json: bool) -> Self {
        Self {
            session: GameSession::new(),
            ascii,
            json,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to gambit!");
        println!("Enter moves like 'e2e4' or 'e2 to e4'. 'reset' starts over, 'quit' exits.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            display_board(self.session.board(), self.ascii);
            display_captured(self.session.captured(), self.ascii);

            print!("{} to move> ", self.session.side_to_move());
            io::stdout().flush().context("failed to flush stdout")?;

            let Some(line) = lines.next() else {
                break; // stdin closed
            };
            let line = line.context("failed to read from stdin")?;

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            let result = match command {
                Command::Quit => break,
                Command::Reset => {
                    self.session.reset();
                    continue;
                }
                Command::History => {
                    let text = self.session.history_text();
                    if text.is_empty() {
                        println!("No moves played yet.");
                    } else {
                        println!("{text}");
                    }
                    continue;
                }
                Command::Move {
                    from,
                    to,
                    promotion,
                } => self.session.submit_move(from, to, promotion),
                Command::Castle(side) => self.session.submit_castle(side),
            };

            match result {
                Ok(outcome) => {
                    if self.json {
                        println!("{}", self.json_response(&outcome));
                    } else {
                        println!("Played {}", outcome.notation);
                    }
                    match outcome.status {
                        GameStatus::Check(color) => println!("{color} is in check!"),
                        GameStatus::Checkmate(winner) => {
                            display_board(self.session.board(), self.ascii);
                            println!("Checkmate! {winner} wins.");
                            println!("{}", self.session.history_text());
                            break;
                        }
                        GameStatus::InProgress => {}
                    }
                }
                Err(err) if err.is_recoverable() => {
                    if self.json {
                        println!("{}", Self::json_rejection(&err));
                    } else {
                        println!("Illegal move: {err}");
                    }
                }
                Err(err) => {
                    // A broken invariant (missing king) cannot be played past
                    error!(%err, "unrecoverable engine error");
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }

    /// Machine-readable per-move response, suitable for piping into
    /// another program.
    fn json_response(&self, outcome: &MoveOutcome) -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "message": "Move recorded",
            "newBoardState": outcome.board,
            "takenPieces": outcome.captured,
            "gameMoves": self.session.history_text(),
            "status": outcome.status,
            "notation": outcome.notation,
        })
    }

    fn json_rejection(err: &ChessError) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "message": err.to_string(),
        })
    }
}
