use gambit::chess::notation::{render_castle, render_move};
use gambit::chess::{Board, CastleSide, Color, GameStatus, Piece, PieceType, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn put(board: &mut Board, square: &str, color: Color, kind: PieceType) {
    board.set(sq(square), Some(Piece::new(color, kind)));
}

#[cfg(test)]
mod piece_letter_tests {
    use super::*;

    #[test]
    fn test_pawn_push_is_bare_destination() {
        let board = Board::new();
        let san = render_move(
            &board,
            sq("e2"),
            sq("e4"),
            Piece::new(Color::White, PieceType::Pawn),
            false,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "e4");
    }

    #[test]
    fn test_pawn_capture_prefixes_origin_file() {
        let mut board = Board::new();
        put(&mut board, "d5", Color::Black, PieceType::Pawn);
        board.set(sq("e5"), Some(Piece::new(Color::White, PieceType::Pawn)));
        board.set(sq("e6"), None);

        let san = render_move(
            &board,
            sq("e5"),
            sq("d6"),
            Piece::new(Color::White, PieceType::Pawn),
            true,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "exd6");
    }

    #[test]
    fn test_knight_uses_piece_letter() {
        let board = Board::new();
        let san = render_move(
            &board,
            sq("g1"),
            sq("f3"),
            Piece::new(Color::White, PieceType::Knight),
            false,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "Nf3");
    }

    #[test]
    fn test_capture_marked_with_x() {
        let mut board = Board::empty();
        put(&mut board, "d4", Color::White, PieceType::Queen);
        put(&mut board, "d8", Color::Black, PieceType::Rook);
        put(&mut board, "e1", Color::White, PieceType::King);
        put(&mut board, "a8", Color::Black, PieceType::King);

        let san = render_move(
            &board,
            sq("d4"),
            sq("d8"),
            Piece::new(Color::White, PieceType::Queen),
            true,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "Qxd8");
    }
}

#[cfg(test)]
mod suffix_tests {
    use super::*;

    #[test]
    fn test_promotion_suffix() {
        let mut board = Board::empty();
        put(&mut board, "e7", Color::White, PieceType::Pawn);
        put(&mut board, "a1", Color::White, PieceType::King);
        put(&mut board, "h8", Color::Black, PieceType::King);

        let san = render_move(
            &board,
            sq("e7"),
            sq("e8"),
            Piece::new(Color::White, PieceType::Pawn),
            false,
            Some(PieceType::Queen),
            &GameStatus::InProgress,
        );
        assert_eq!(san, "e8=Q");
    }

    #[test]
    fn test_check_and_checkmate_marks() {
        let board = Board::new();
        let piece = Piece::new(Color::White, PieceType::Queen);

        let check = render_move(
            &board,
            sq("d1"),
            sq("h5"),
            piece,
            false,
            None,
            &GameStatus::Check(Color::Black),
        );
        assert_eq!(check, "Qh5+");

        let mate = render_move(
            &board,
            sq("d1"),
            sq("h5"),
            piece,
            false,
            None,
            &GameStatus::Checkmate(Color::White),
        );
        assert_eq!(mate, "Qh5#");
    }

    #[test]
    fn test_castle_rendering() {
        assert_eq!(
            render_castle(CastleSide::Kingside, &GameStatus::InProgress),
            "O-O"
        );
        assert_eq!(
            render_castle(CastleSide::Queenside, &GameStatus::InProgress),
            "O-O-O"
        );
        assert_eq!(
            render_castle(CastleSide::Kingside, &GameStatus::Check(Color::Black)),
            "O-O+"
        );
        assert_eq!(
            render_castle(CastleSide::Queenside, &GameStatus::Checkmate(Color::White)),
            "O-O-O#"
        );
    }
}

#[cfg(test)]
mod disambiguation_tests {
    use super::*;

    #[test]
    fn test_file_disambiguation_between_rooks() {
        let mut board = Board::empty();
        put(&mut board, "a1", Color::White, PieceType::Rook);
        put(&mut board, "h1", Color::White, PieceType::Rook);
        put(&mut board, "e3", Color::White, PieceType::King);
        put(&mut board, "e8", Color::Black, PieceType::King);

        let san = render_move(
            &board,
            sq("a1"),
            sq("d1"),
            Piece::new(Color::White, PieceType::Rook),
            false,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "Rad1");
    }

    #[test]
    fn test_rank_disambiguation_when_files_match() {
        let mut board = Board::empty();
        put(&mut board, "a1", Color::White, PieceType::Rook);
        put(&mut board, "a5", Color::White, PieceType::Rook);
        put(&mut board, "e3", Color::White, PieceType::King);
        put(&mut board, "e8", Color::Black, PieceType::King);

        let san = render_move(
            &board,
            sq("a1"),
            sq("a3"),
            Piece::new(Color::White, PieceType::Rook),
            false,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "R1a3");
    }

    #[test]
    fn test_no_disambiguation_when_unambiguous() {
        let mut board = Board::empty();
        put(&mut board, "a1", Color::White, PieceType::Rook);
        put(&mut board, "e3", Color::White, PieceType::King);
        put(&mut board, "e8", Color::Black, PieceType::King);

        let san = render_move(
            &board,
            sq("a1"),
            sq("d1"),
            Piece::new(Color::White, PieceType::Rook),
            false,
            None,
            &GameStatus::InProgress,
        );
        assert_eq!(san, "Rd1");
    }
}
