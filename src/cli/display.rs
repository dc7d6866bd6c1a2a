use crate::chess::{Board, CapturedPieces, Color, Piece, PieceType, Square};

/// Display the board from White's perspective (rank 8 at the top), with
/// either Unicode symbols or ASCII piece letters.
pub fn display_board(board: &Board, ascii: bool) {
    println!();
    println!("  ┌─┬─┬─┬─┬─┬─┬─┬─┐");

    // Row 0 is Black's back rank, so iterating rows top-down already gives
    // White's perspective
    for row in 0..8u8 {
        let rank_number = 8 - row;

        print!("{rank_number} │");
        for col in 0..8u8 {
            let symbol = match board.piece_at(Square::new_unchecked(row, col)) {
                Some(piece) if ascii => piece.to_string(),
                Some(piece) => unicode_symbol(piece).to_string(),
                None => " ".to_string(),
            };
            print!("{symbol}│");
        }
        println!(" {rank_number}");

        if row < 7 {
            println!("  ├─┼─┼─┼─┼─┼─┼─┼─┤");
        }
    }

    println!("  └─┴─┴─┴─┴─┴─┴─┴─┘");
    println!("   a b c d e f g h");
}

/// Unicode chess symbol for a piece.
pub fn unicode_symbol(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Pawn) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Pawn) => '♟',
    }
}

/// Captures reordered for display, most valuable first. The sort is
/// stable, so equal-value pieces keep their capture order.
pub fn sorted_by_value(taken: &[Piece]) -> Vec<Piece> {
    let mut pieces = taken.to_vec();
    pieces.sort_by_key(|piece| std::cmp::Reverse(piece.kind.value()));
    pieces
}

/// Print the captured-piece tallies, one line per side that has captures.
pub fn display_captured(captured: &CapturedPieces, ascii: bool) {
    if captured.is_empty() {
        return;
    }

    for (label, taken) in [
        ("White has captured", &captured.by_white),
        ("Black has captured", &captured.by_black),
    ] {
        if taken.is_empty() {
            continue;
        }
        let symbols: Vec<String> = sorted_by_value(taken)
            .iter()
            .map(|&piece| {
                if ascii {
                    piece.to_string()
                } else {
                    unicode_symbol(piece).to_string()
                }
            })
            .collect();
        println!("{label}: {}", symbols.join(" "));
    }
}
