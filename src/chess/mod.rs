//! The rules engine: board representation, move generation, attack
//! detection, the legality filter, castling and en passant, and the
//! [`GameSession`] state machine that ties them together.

// Re-export all public items
pub use self::attack::is_attacked;
pub use self::board::{Board, CapturedPieces, CastlingRights};
pub use self::error::{CastlingViolation, ChessError};
pub use self::movegen::pseudo_legal_moves;
pub use self::moves::{Candidate, CastleSide, LastMove};
pub use self::piece::{Color, Piece, PieceType};
pub use self::rules::{castle_squares, has_any_legal_move, validate_castling, validate_move};
pub use self::session::{GameSession, GameStatus, MoveOutcome};
pub use self::square::Square;

// Define submodules
mod attack;
mod board;
mod error;
mod movegen;
mod moves;
pub mod notation;
mod piece;
mod rules;
mod session;
mod square;
