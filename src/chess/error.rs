use super::piece::{Color, Piece};
use super::square::Square;
use thiserror::Error;

/// The specific castling precondition that was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastlingViolation {
    #[error("the king has already moved")]
    KingMoved,
    #[error("that rook has already moved")]
    RookMoved,
    #[error("no rook on its starting square")]
    RookMissing,
    #[error("squares between king and rook are occupied")]
    PathBlocked,
    #[error("the king is in check")]
    KingInCheck,
    #[error("a square the king must cross is under attack")]
    PathUnderAttack,
}

/// Errors produced while validating or applying a move.
///
/// Every variant except [`ChessError::NoTargetKing`] is a recoverable
/// per-move rejection: the session is left untouched and the caller may
/// submit another move. A missing king means the board invariant is broken
/// and the game state cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("no piece at {0}")]
    NoPieceAtSource(Square),

    #[error("piece at {square} belongs to {owner}, but it is {mover}'s turn")]
    WrongPlayersPiece {
        square: Square,
        owner: Color,
        mover: Color,
    },

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalDestination {
        piece: Piece,
        from: Square,
        to: Square,
    },

    #[error("move would leave the {0} king in check")]
    SelfCheckViolation(Color),

    #[error("castling rejected: {0}")]
    CastlingPreconditionFailed(CastlingViolation),

    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    #[error("no {0} king on the board (corrupted game state)")]
    NoTargetKing(Color),
}

impl ChessError {
    /// Whether the error is a normal per-move rejection rather than a
    /// corrupted-state failure.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChessError::NoTargetKing(_))
    }
}
