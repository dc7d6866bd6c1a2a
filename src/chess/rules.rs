use super::attack::is_attacked;
use super::board::{Board, CastlingRights};
use super::error::{CastlingViolation, ChessError};
use super::movegen::pseudo_legal_moves;
use super::moves::{Candidate, CastleSide, LastMove};
use super::piece::{Color, PieceType};
use super::square::Square;
use tracing::debug;

/// Validate a proposed relocation for `mover`.
///
/// Checks, in order: the move goes somewhere, a piece of the mover's color
/// sits on `from`, the destination is in the piece's pseudo-legal set, and
/// the move does not leave the mover's own king attacked. Returns the
/// matched candidate (carrying any en-passant capture square) so the caller
/// can commit exactly what was validated. Never mutates `board`.
pub fn validate_move(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    last_move: Option<LastMove>,
) -> Result<Candidate, ChessError> {
    let piece = board.piece_at(from).ok_or(ChessError::NoPieceAtSource(from))?;

    if piece.color != mover {
        return Err(ChessError::WrongPlayersPiece {
            square: from,
            owner: piece.color,
            mover,
        });
    }

    if from == to {
        return Err(ChessError::IllegalDestination { piece, from, to });
    }

    let candidate = pseudo_legal_moves(board, from, last_move)
        .into_iter()
        .find(|candidate| candidate.to == to)
        .ok_or(ChessError::IllegalDestination { piece, from, to })?;

    ensure_king_safe(board, from, &candidate, mover)?;

    Ok(candidate)
}

/// Simulate the candidate on a scratch copy of the board and reject it if
/// the mover's king ends up attacked. This is the sole mechanism preventing
/// self-check; the real board is never touched.
pub(crate) fn ensure_king_safe(
    board: &Board,
    from: Square,
    candidate: &Candidate,
    mover: Color,
) -> Result<(), ChessError> {
    let mut scratch = board.clone();
    if let Some(captured_pawn) = candidate.en_passant_capture {
        scratch.set(captured_pawn, None);
    }
    scratch.relocate(from, candidate.to);

    let king = scratch
        .find_king(mover)
        .ok_or(ChessError::NoTargetKing(mover))?;

    if is_attacked(&scratch, king, mover.opposite()) {
        debug!(%from, to = %candidate.to, "rejected: would leave {mover} king in check");
        return Err(ChessError::SelfCheckViolation(mover));
    }

    Ok(())
}

/// Whether `color` has at least one legal move anywhere on the board.
///
/// Short-circuits on the first candidate that survives the legality filter.
/// A missing king propagates as [`ChessError::NoTargetKing`] rather than
/// reading as "no legal moves".
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    last_move: Option<LastMove>,
) -> Result<bool, ChessError> {
    for (from, _) in board.pieces_of(color) {
        for candidate in pseudo_legal_moves(board, from, last_move) {
            match ensure_king_safe(board, from, &candidate, color) {
                Ok(()) => return Ok(true),
                Err(ChessError::SelfCheckViolation(_)) => continue,
                Err(err) => return Err(err),
            }
        }
    }
    Ok(false)
}

/// Check every castling precondition for `color` on `side`.
///
/// Fails with the specific violation: king or rook already moved, rook gone
/// from its corner, occupied path, king in check, or an attacked square on
/// the king's two-square slide. No board mutation happens on any path.
pub fn validate_castling(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    side: CastleSide,
) -> Result<(), ChessError> {
    use CastlingViolation::*;

    if rights.king_moved(color) {
        return Err(ChessError::CastlingPreconditionFailed(KingMoved));
    }
    if rights.rook_moved(color, side) {
        return Err(ChessError::CastlingPreconditionFailed(RookMoved));
    }

    let row = color.back_row();
    let king_from = Square::new_unchecked(row, 4);
    let rook_from = Square::new_unchecked(row, side.rook_col());

    match board.piece_at(rook_from) {
        Some(piece) if piece.color == color && piece.kind == PieceType::Rook => {}
        _ => return Err(ChessError::CastlingPreconditionFailed(RookMissing)),
    }

    // Every square strictly between king and rook must be empty
    let (low, high) = if king_from.col < rook_from.col {
        (king_from.col, rook_from.col)
    } else {
        (rook_from.col, king_from.col)
    };
    for col in (low + 1)..high {
        if board.piece_at(Square::new_unchecked(row, col)).is_some() {
            return Err(ChessError::CastlingPreconditionFailed(PathBlocked));
        }
    }

    let opponent = color.opposite();
    if is_attacked(board, king_from, opponent) {
        return Err(ChessError::CastlingPreconditionFailed(KingInCheck));
    }

    // The square the king crosses and the square it lands on
    let step: i8 = if side.king_target_col() > king_from.col {
        1
    } else {
        -1
    };
    let crossed = Square::new_unchecked(row, (king_from.col as i8 + step) as u8);
    let target = Square::new_unchecked(row, side.king_target_col());
    for square in [crossed, target] {
        if is_attacked(board, square, opponent) {
            return Err(ChessError::CastlingPreconditionFailed(PathUnderAttack));
        }
    }

    Ok(())
}

/// The four squares involved in a castle:
/// `(king_from, king_to, rook_from, rook_to)`.
pub fn castle_squares(color: Color, side: CastleSide) -> (Square, Square, Square, Square) {
    let row = color.back_row();
    (
        Square::new_unchecked(row, 4),
        Square::new_unchecked(row, side.king_target_col()),
        Square::new_unchecked(row, side.rook_col()),
        Square::new_unchecked(row, side.rook_target_col()),
    )
}
