pub mod chess;
pub mod cli;

// Re-export key types for easy testing
pub use chess::{
    Board, Candidate, CastleSide, CastlingRights, ChessError, Color, GameSession, GameStatus,
    LastMove, MoveOutcome, Piece, PieceType, Square,
};
