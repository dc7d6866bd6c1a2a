use super::moves::CastleSide;
use super::piece::{Color, Piece, PieceType};
use super::square::Square;
use serde::{Deserialize, Serialize};

/// Castling rights for both players.
///
/// Six independent flags: the king plus each rook, per color. The flags are
/// monotonic: once a piece has moved, the right never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    white_king_moved: bool,
    white_kingside_rook_moved: bool,
    white_queenside_rook_moved: bool,
    black_king_moved: bool,
    black_kingside_rook_moved: bool,
    black_queenside_rook_moved: bool,
}

impl CastlingRights {
    /// Fresh rights with all castling available
    pub fn new() -> Self {
        Self {
            white_king_moved: false,
            white_kingside_rook_moved: false,
            white_queenside_rook_moved: false,
            black_king_moved: false,
            black_kingside_rook_moved: false,
            black_queenside_rook_moved: false,
        }
    }

    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside_rook_moved,
            (Color::White, CastleSide::Queenside) => self.white_queenside_rook_moved,
            (Color::Black, CastleSide::Kingside) => self.black_kingside_rook_moved,
            (Color::Black, CastleSide::Queenside) => self.black_queenside_rook_moved,
        }
    }

    /// Mark the king as having moved (clears both of that color's rights)
    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside_rook_moved = true,
            (Color::White, CastleSide::Queenside) => self.white_queenside_rook_moved = true,
            (Color::Black, CastleSide::Kingside) => self.black_kingside_rook_moved = true,
            (Color::Black, CastleSide::Queenside) => self.black_queenside_rook_moved = true,
        }
    }

    /// Mark a rook as moved based on the corner square it left, if any.
    /// Moves from non-corner squares change nothing.
    pub fn mark_rook_moved_from(&mut self, from: Square) {
        match (from.row, from.col) {
            (7, 0) => self.white_queenside_rook_moved = true, // a1
            (7, 7) => self.white_kingside_rook_moved = true,  // h1
            (0, 0) => self.black_queenside_rook_moved = true, // a8
            (0, 7) => self.black_kingside_rook_moved = true,  // h8
            _ => {} // Not a corner rook
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::new()
    }
}

/// Pieces captured so far, bucketed by the capturing side.
///
/// Recorded at the moment each capture is committed, so the tally stays
/// correct even if a caller inspects the board mid-game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub by_white: Vec<Piece>,
    pub by_black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn record(&mut self, taken: Piece) {
        match taken.color {
            // A black piece was taken, so White captured it
            Color::Black => self.by_white.push(taken),
            Color::White => self.by_black.push(taken),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_white.is_empty() && self.by_black.is_empty()
    }
}

/// An 8x8 grid of optional pieces.
///
/// `squares[row][col]` with row 0 = Black's back rank (see [`Square`]).
/// Pure data: the board knows how to hold and relocate pieces, not whether
/// a move is legal. Cloning is a flat array copy, which keeps the
/// simulate-then-discard legality check cheap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with the standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();

        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        // Black pieces on rows 0 and 1
        for (col, &kind) in back_rank.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceType::Pawn));
        }

        // White pieces on rows 6 and 7
        for (col, &kind) in back_rank.iter().enumerate() {
            board.squares[6][col] = Some(Piece::new(Color::White, PieceType::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }

        board
    }

    /// Board with no pieces (for building test positions)
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece at `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Place or clear a square.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Raw relocation: move whatever sits on `from` to `to`, returning the
    /// previous occupant of `to`. No rights or history bookkeeping.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set(from, None);
        self.set(to, piece);
        captured
    }

    /// Locate the king of `color`.
    ///
    /// `None` signals a corrupted or terminal position; callers must treat
    /// it as an invariant violation, never as "no legal moves".
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceType::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// All squares occupied by pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
