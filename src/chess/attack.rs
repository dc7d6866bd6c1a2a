use super::board::Board;
use super::movegen::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::piece::{Color, Piece, PieceType};
use super::square::Square;

/// Whether `square` is attacked by any piece of `by`.
///
/// Independent of whose turn it is: check detection asks with the opponent
/// of the king's color, castling asks about the king's path. Returns on the
/// first threat found.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    // Orthogonal rays: the first blocker threatens if it is a rook or queen
    for &(d_row, d_col) in &ROOK_DIRECTIONS {
        if let Some(blocker) = first_piece_along(board, square, d_row, d_col) {
            if blocker.color == by && matches!(blocker.kind, PieceType::Rook | PieceType::Queen) {
                return true;
            }
        }
    }

    // Diagonal rays: bishop or queen
    for &(d_row, d_col) in &BISHOP_DIRECTIONS {
        if let Some(blocker) = first_piece_along(board, square, d_row, d_col) {
            if blocker.color == by && matches!(blocker.kind, PieceType::Bishop | PieceType::Queen)
            {
                return true;
            }
        }
    }

    // Knights jump, so no blocking applies
    let knight = Piece::new(by, PieceType::Knight);
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if board.piece_at(sq) == Some(knight) {
                return true;
            }
        }
    }

    // A pawn of `by` attacks diagonally forward, so it would sit one row
    // behind `square` relative to its own direction of travel
    let pawn = Piece::new(by, PieceType::Pawn);
    let pawn_direction = by.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(sq) = square.offset(-pawn_direction, d_col) {
            if board.piece_at(sq) == Some(pawn) {
                return true;
            }
        }
    }

    // Adjacent enemy king
    let king = Piece::new(by, PieceType::King);
    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(sq) = square.offset(d_row, d_col) {
            if board.piece_at(sq) == Some(king) {
                return true;
            }
        }
    }

    false
}

/// First occupied square walking from `from` along `(d_row, d_col)`.
fn first_piece_along(board: &Board, from: Square, d_row: i8, d_col: i8) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}
