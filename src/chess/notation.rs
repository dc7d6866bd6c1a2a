use super::board::Board;
use super::moves::CastleSide;
use super::piece::{Piece, PieceType};
use super::rules::validate_move;
use super::session::GameStatus;
use super::square::Square;

/// Render a committed move in algebraic notation:
/// `<letter><disambiguation?><x?><destination><=promotion?><+|#>`.
///
/// Pawns use no piece letter and prefix their origin file on captures.
/// `board_before` is the position the move was played from, needed to
/// decide whether a sibling piece of the same kind could also have reached
/// the destination.
pub fn render_move(
    board_before: &Board,
    from: Square,
    to: Square,
    piece: Piece,
    is_capture: bool,
    promotion: Option<PieceType>,
    status: &GameStatus,
) -> String {
    let mut san = String::new();

    if piece.kind == PieceType::Pawn {
        if is_capture {
            san.push(from.file_char());
        }
    } else {
        san.push_str(&piece.kind.to_string());
        san.push_str(&disambiguation(board_before, from, to, piece));
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&to.to_string());

    if let Some(kind) = promotion {
        san.push('=');
        san.push_str(&kind.to_string());
    }

    san.push_str(status_suffix(status));
    san
}

/// Render a castle, with any check marks.
pub fn render_castle(side: CastleSide, status: &GameStatus) -> String {
    format!("{side}{}", status_suffix(status))
}

fn status_suffix(status: &GameStatus) -> &'static str {
    match status {
        GameStatus::Check(_) => "+",
        GameStatus::Checkmate(_) => "#",
        GameStatus::InProgress => "",
    }
}

/// Origin file (or rank, when the files match) when another piece of the
/// same color and kind could also legally reach `to`. Kings are unique, so
/// only queens, rooks, bishops, and knights can need this.
fn disambiguation(board: &Board, from: Square, to: Square, piece: Piece) -> String {
    if piece.kind == PieceType::King {
        return String::new();
    }

    for (square, other) in board.pieces_of(piece.color) {
        if square == from || other.kind != piece.kind {
            continue;
        }
        if validate_move(board, square, to, piece.color, None).is_ok() {
            return if square.col != from.col {
                from.file_char().to_string()
            } else {
                from.rank_char().to_string()
            };
        }
    }

    String::new()
}
