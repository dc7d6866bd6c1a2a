use super::attack::is_attacked;
use super::board::{Board, CapturedPieces, CastlingRights};
use super::error::ChessError;
use super::moves::{CastleSide, LastMove};
use super::notation;
use super::piece::{Color, Piece, PieceType};
use super::rules;
use super::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Where the game stands after the most recent committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// The named color's king is attacked but a legal move exists.
    Check(Color),
    /// The named color delivered mate and wins.
    Checkmate(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
        }
    }
}

/// Everything the presentation layer needs after a successful move.
/// All fields are derived from the session, recomputed per move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    pub status: GameStatus,
    pub notation: String,
    pub captured: CapturedPieces,
}

/// One game of chess.
///
/// Owns the board, side to move, castling rights, last move, and history,
/// and is mutated exclusively through [`GameSession::submit_move`] and
/// [`GameSession::submit_castle`]. A rejected move leaves every field
/// untouched. Each concurrent game owns its own session; there is no shared
/// state between instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
    /// Grouped two half-moves per entry: `"1. e4 e5"`.
    history: Vec<String>,
    move_number: u32,
    status: GameStatus,
    captured: CapturedPieces,
}

impl GameSession {
    /// A fresh game: standard starting position, White to move, all
    /// castling rights available, empty history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::new(),
            last_move: None,
            history: Vec::new(),
            move_number: 1,
            status: GameStatus::InProgress,
            captured: CapturedPieces::default(),
        }
    }

    /// Replace this session wholesale with a fresh one. A full replacement,
    /// not a per-field reset, so no stale state can survive.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Self::new();
    }

    /// Read-only snapshot of the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling_rights
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Full move list as one string (`"1. e4 e5 2. Nf3"`).
    pub fn history_text(&self) -> String {
        self.history.join(" ")
    }

    /// Validate and commit one move for the side to move.
    ///
    /// A king shifting two columns along its back row routes to the
    /// castling path; everything else goes through the legality filter. On
    /// rejection the session is unchanged and the error names the reason.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<MoveOutcome, ChessError> {
        let mover = self.side_to_move;
        let piece = self.board.piece_at(from).ok_or(ChessError::NoPieceAtSource(from))?;

        if piece.kind == PieceType::King
            && piece.color == mover
            && from.row == to.row
            && from.col.abs_diff(to.col) == 2
        {
            let side = if to.col > from.col {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            return self.castle(side);
        }

        let candidate = rules::validate_move(&self.board, from, to, mover, self.last_move)?;
        self.check_promotion(piece, to, promotion)?;

        // Commit: everything past this point must succeed
        let board_before = self.board.clone();

        let mut captured = self.board.piece_at(to);
        if let Some(pawn_square) = candidate.en_passant_capture {
            captured = self.board.piece_at(pawn_square);
            self.board.set(pawn_square, None);
        }

        let placed = match promotion {
            Some(kind) => Piece::new(mover, kind),
            None => piece,
        };
        self.board.set(from, None);
        self.board.set(to, Some(placed));

        if let Some(taken) = captured {
            self.captured.record(taken);
        }

        match piece.kind {
            PieceType::King => self.castling_rights.mark_king_moved(mover),
            PieceType::Rook => self.castling_rights.mark_rook_moved_from(from),
            _ => {}
        }

        self.last_move = Some(LastMove::new(piece, from, to));
        self.status = self.evaluate_opponent(mover)?;

        let san = notation::render_move(
            &board_before,
            from,
            to,
            piece,
            captured.is_some(),
            promotion,
            &self.status,
        );
        debug!(%from, %to, notation = %san, status = %self.status, "move committed");

        self.push_history(san.clone());
        self.side_to_move = mover.opposite();

        Ok(self.outcome(san))
    }

    /// Castle for the side to move. Convenience wrapper over the same path
    /// that [`GameSession::submit_move`] takes for a two-column king shift.
    pub fn submit_castle(&mut self, side: CastleSide) -> Result<MoveOutcome, ChessError> {
        self.castle(side)
    }

    fn castle(&mut self, side: CastleSide) -> Result<MoveOutcome, ChessError> {
        let mover = self.side_to_move;
        rules::validate_castling(&self.board, &self.castling_rights, mover, side)?;

        let (king_from, king_to, rook_from, rook_to) = rules::castle_squares(mover, side);
        self.board.relocate(king_from, king_to);
        self.board.relocate(rook_from, rook_to);
        self.castling_rights.mark_king_moved(mover);
        self.castling_rights.mark_rook_moved(mover, side);

        self.last_move = Some(LastMove::new(
            Piece::new(mover, PieceType::King),
            king_from,
            king_to,
        ));
        self.status = self.evaluate_opponent(mover)?;

        let san = notation::render_castle(side, &self.status);
        debug!(%mover, castle = %side, status = %self.status, "castle committed");

        self.push_history(san.clone());
        self.side_to_move = mover.opposite();

        Ok(self.outcome(san))
    }

    /// Re-evaluate the opponent's king after `mover` committed a move.
    fn evaluate_opponent(&self, mover: Color) -> Result<GameStatus, ChessError> {
        let defender = mover.opposite();
        let king = self
            .board
            .find_king(defender)
            .ok_or(ChessError::NoTargetKing(defender))?;

        let in_check = is_attacked(&self.board, king, mover);
        let has_moves = rules::has_any_legal_move(&self.board, defender, self.last_move)?;

        if in_check {
            if has_moves {
                Ok(GameStatus::Check(defender))
            } else {
                Ok(GameStatus::Checkmate(mover))
            }
        } else {
            if !has_moves {
                // Stalemate detection is out of scope; surface it instead
                // of inventing a terminal state
                warn!(%defender, "no legal moves while not in check (stalemate is not detected)");
            }
            Ok(GameStatus::InProgress)
        }
    }

    fn check_promotion(
        &self,
        piece: Piece,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<(), ChessError> {
        let promotion_row = piece.color.promotion_row();

        match promotion {
            Some(kind) => {
                if piece.kind != PieceType::Pawn {
                    return Err(ChessError::InvalidPromotion(
                        "only pawns can be promoted".to_string(),
                    ));
                }
                if to.row != promotion_row {
                    return Err(ChessError::InvalidPromotion(format!(
                        "promotion only allowed on the last rank, not {to}"
                    )));
                }
                if matches!(kind, PieceType::King | PieceType::Pawn) {
                    return Err(ChessError::InvalidPromotion(
                        "cannot promote to king or pawn".to_string(),
                    ));
                }
                Ok(())
            }
            None => {
                if piece.kind == PieceType::Pawn && to.row == promotion_row {
                    return Err(ChessError::InvalidPromotion(
                        "promotion piece required when a pawn reaches the last rank".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Append one half-move, grouping two per numbered entry.
    fn push_history(&mut self, san: String) {
        match self.history.last_mut() {
            // "1. e4" is still waiting for Black's reply
            Some(entry) if entry.split(' ').count() == 2 => {
                entry.push(' ');
                entry.push_str(&san);
                self.move_number += 1;
            }
            _ => {
                let number = self.move_number;
                self.history.push(format!("{number}. {san}"));
            }
        }
    }

    fn outcome(&self, notation: String) -> MoveOutcome {
        MoveOutcome {
            board: self.board.clone(),
            status: self.status,
            notation,
            captured: self.captured.clone(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
