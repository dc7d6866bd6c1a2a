use super::piece::Piece;
use super::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The most recently committed move.
///
/// Consumed only by en-passant eligibility on the immediately following
/// move; everything else ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self { piece, from, to }
    }

    /// Whether this was a pawn advancing two rows in one move.
    pub fn is_pawn_double_step(&self) -> bool {
        self.piece.kind == super::piece::PieceType::Pawn
            && self.from.row.abs_diff(self.to.row) == 2
    }
}

/// A pseudo-legal destination produced by move generation.
///
/// En passant is the one move whose capture square differs from its
/// destination, so the generator records the captured pawn's square on the
/// candidate instead of mutating anything. The capture is applied only when
/// the candidate is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub to: Square,
    pub en_passant_capture: Option<Square>,
}

impl Candidate {
    pub fn plain(to: Square) -> Self {
        Self {
            to,
            en_passant_capture: None,
        }
    }

    pub fn en_passant(to: Square, captured_pawn: Square) -> Self {
        Self {
            to,
            en_passant_capture: Some(captured_pawn),
        }
    }
}

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Starting column of the rook on this side.
    pub fn rook_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king ends on.
    pub fn king_target_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the rook ends on (adjacent to the king, on the far side).
    pub fn rook_target_col(&self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "O-O"),
            CastleSide::Queenside => write!(f, "O-O-O"),
        }
    }
}
