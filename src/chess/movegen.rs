use super::board::Board;
use super::moves::{Candidate, LastMove};
use super::piece::{Color, PieceType};
use super::square::Square;
use tracing::trace;

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Enumerate the pseudo-legal destinations for the piece on `from`.
///
/// Pseudo-legal means the move obeys the piece's movement pattern and board
/// occupancy; whether it leaves the mover's own king attacked is the
/// legality filter's job. `last_move` feeds en-passant eligibility and is
/// ignored by every piece kind except pawns. An empty `from` square yields
/// an empty set.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    last_move: Option<LastMove>,
) -> Vec<Candidate> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let candidates = match piece.kind {
        PieceType::Rook => slide(board, from, piece.color, &ROOK_DIRECTIONS),
        PieceType::Bishop => slide(board, from, piece.color, &BISHOP_DIRECTIONS),
        PieceType::Queen => {
            // Queen = rook rays plus bishop rays from the same origin
            let mut moves = slide(board, from, piece.color, &ROOK_DIRECTIONS);
            moves.extend(slide(board, from, piece.color, &BISHOP_DIRECTIONS));
            moves
        }
        PieceType::Knight => step(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceType::King => step(board, from, piece.color, &KING_OFFSETS),
        PieceType::Pawn => pawn_moves(board, from, piece.color, last_move),
    };

    trace!(
        piece = %piece,
        %from,
        count = candidates.len(),
        "generated pseudo-legal moves"
    );

    candidates
}

/// Walk each direction ray outward one square at a time, stopping at the
/// first occupied square (included when it holds an opponent piece).
fn slide(board: &Board, from: Square, mover: Color, directions: &[(i8, i8)]) -> Vec<Candidate> {
    let mut moves = Vec::new();

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => {
                    moves.push(Candidate::plain(next));
                    current = next;
                }
                Some(blocker) => {
                    if blocker.color != mover {
                        moves.push(Candidate::plain(next));
                    }
                    break;
                }
            }
        }
    }

    moves
}

/// Fixed-offset movement (knight and king): destination admissible when it
/// is on the board and empty or opponent-occupied.
fn step(board: &Board, from: Square, mover: Color, offsets: &[(i8, i8)]) -> Vec<Candidate> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| match board.piece_at(to) {
            None => true,
            Some(occupant) => occupant.color != mover,
        })
        .map(Candidate::plain)
        .collect()
}

fn pawn_moves(
    board: &Board,
    from: Square,
    mover: Color,
    last_move: Option<LastMove>,
) -> Vec<Candidate> {
    let mut moves = Vec::new();
    let direction = mover.pawn_direction();

    // Single forward step, and the double step from the starting row when
    // both squares ahead are empty
    if let Some(one_ahead) = from.offset(direction, 0) {
        if board.piece_at(one_ahead).is_none() {
            moves.push(Candidate::plain(one_ahead));

            if from.row == mover.pawn_start_row() {
                if let Some(two_ahead) = one_ahead.offset(direction, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(Candidate::plain(two_ahead));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant onto an empty square
    for d_col in [-1, 1] {
        let Some(diagonal) = from.offset(direction, d_col) else {
            continue;
        };

        match board.piece_at(diagonal) {
            Some(target) if target.color != mover => {
                moves.push(Candidate::plain(diagonal));
            }
            Some(_) => {}
            None => {
                if let Some(capture) = en_passant_capture(from, diagonal, mover, last_move) {
                    trace!(%from, to = %diagonal, captured = %capture, "en passant available");
                    moves.push(Candidate::en_passant(diagonal, capture));
                }
            }
        }
    }

    moves
}

/// En-passant eligibility for a diagonal move onto an empty square.
///
/// All of the following must hold: the last move was an opposing pawn's
/// double step, that pawn now sits beside the mover (same row, in the
/// diagonal's column), and the mover stands on its en-passant row. The
/// returned square is the captured pawn's, removed only at commit time.
fn en_passant_capture(
    from: Square,
    diagonal: Square,
    mover: Color,
    last_move: Option<LastMove>,
) -> Option<Square> {
    let last = last_move?;

    let eligible = last.is_pawn_double_step()
        && last.piece.color != mover
        && last.to.col == diagonal.col
        && last.to.row == from.row
        && from.row == mover.en_passant_row();

    eligible.then(|| Square::new_unchecked(from.row, diagonal.col))
}
