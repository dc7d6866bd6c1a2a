use gambit::chess::{
    castle_squares, validate_castling, Board, CastleSide, CastlingRights, CastlingViolation,
    ChessError, Color, Piece, PieceType, Square,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn put(board: &mut Board, square: &str, color: Color, kind: PieceType) {
    board.set(sq(square), Some(Piece::new(color, kind)));
}

/// Kings and rooks on their home squares, nothing in between.
fn castling_ready_board() -> Board {
    let mut board = Board::empty();
    put(&mut board, "e1", Color::White, PieceType::King);
    put(&mut board, "a1", Color::White, PieceType::Rook);
    put(&mut board, "h1", Color::White, PieceType::Rook);
    put(&mut board, "e8", Color::Black, PieceType::King);
    put(&mut board, "a8", Color::Black, PieceType::Rook);
    put(&mut board, "h8", Color::Black, PieceType::Rook);
    board
}

fn violation(result: Result<(), ChessError>) -> CastlingViolation {
    match result {
        Err(ChessError::CastlingPreconditionFailed(violation)) => violation,
        other => panic!("expected a castling violation, got {other:?}"),
    }
}

#[cfg(test)]
mod precondition_tests {
    use super::*;

    #[test]
    fn test_clear_path_and_untouched_pieces_allowed() {
        let board = castling_ready_board();
        let rights = CastlingRights::new();

        for color in [Color::White, Color::Black] {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                assert!(
                    validate_castling(&board, &rights, color, side).is_ok(),
                    "{color} {side} should be allowed"
                );
            }
        }
    }

    #[test]
    fn test_moved_king_rejected() {
        let board = castling_ready_board();
        let mut rights = CastlingRights::new();
        rights.mark_king_moved(Color::White);

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::KingMoved);
    }

    #[test]
    fn test_moved_rook_rejected_per_side() {
        let board = castling_ready_board();
        let mut rights = CastlingRights::new();
        rights.mark_rook_moved(Color::White, CastleSide::Kingside);

        let kingside = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(kingside), CastlingViolation::RookMoved);

        // The other rook's right survives
        assert!(validate_castling(&board, &rights, Color::White, CastleSide::Queenside).is_ok());
    }

    #[test]
    fn test_captured_rook_rejected() {
        let mut board = castling_ready_board();
        board.set(sq("h1"), None);
        let rights = CastlingRights::new();

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::RookMissing);
    }

    #[test]
    fn test_blocked_path_rejected() {
        let board = Board::new(); // bishops and knights still at home
        let rights = CastlingRights::new();

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::PathBlocked);
    }

    #[test]
    fn test_king_in_check_rejected() {
        let mut board = castling_ready_board();
        put(&mut board, "e4", Color::Black, PieceType::Rook);
        let rights = CastlingRights::new();

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::KingInCheck);
    }

    #[test]
    fn test_attacked_transit_square_rejected() {
        // Black rook eyes f1: the king would pass through an attacked square
        let mut board = castling_ready_board();
        put(&mut board, "f4", Color::Black, PieceType::Rook);
        let rights = CastlingRights::new();

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::PathUnderAttack);
    }

    #[test]
    fn test_attacked_landing_square_rejected() {
        let mut board = castling_ready_board();
        put(&mut board, "g4", Color::Black, PieceType::Rook);
        let rights = CastlingRights::new();

        let result = validate_castling(&board, &rights, Color::White, CastleSide::Kingside);
        assert_eq!(violation(result), CastlingViolation::PathUnderAttack);
    }

    #[test]
    fn test_attack_on_rook_path_only_is_fine() {
        // Queenside: b1 is crossed by the rook, not the king, so an attack
        // there does not block castling
        let mut board = castling_ready_board();
        put(&mut board, "b4", Color::Black, PieceType::Rook);
        let rights = CastlingRights::new();

        assert!(validate_castling(&board, &rights, Color::White, CastleSide::Queenside).is_ok());
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_white_kingside_squares() {
        let (king_from, king_to, rook_from, rook_to) =
            castle_squares(Color::White, CastleSide::Kingside);
        assert_eq!(king_from, sq("e1"));
        assert_eq!(king_to, sq("g1"));
        assert_eq!(rook_from, sq("h1"));
        assert_eq!(rook_to, sq("f1"));
    }

    #[test]
    fn test_black_queenside_squares() {
        let (king_from, king_to, rook_from, rook_to) =
            castle_squares(Color::Black, CastleSide::Queenside);
        assert_eq!(king_from, sq("e8"));
        assert_eq!(king_to, sq("c8"));
        assert_eq!(rook_from, sq("a8"));
        assert_eq!(rook_to, sq("d8"));
    }
}
