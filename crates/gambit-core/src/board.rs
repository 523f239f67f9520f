//! The 8x8 grid of optional pieces. Pure placement data with no rules knowledge.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, one slot per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// The standard initial layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for color in Color::ALL {
                let back = Square::from_coords(file, color.back_rank());
                let pawn = Square::from_coords(file, color.pawn_rank());
                if let (Some(back), Some(pawn)) = (back, pawn) {
                    board.set(back, Some(Piece::new(kind, color)));
                    board.set(pawn, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place or clear a piece. Never rejects.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Clear `sq`, returning what stood there.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Scan for the king of `color`. `None` on boards without one.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    /// Occupied squares with their pieces, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color() == color)
    }

    /// Number of pieces of the given kind and color.
    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|&&p| p == Some(piece)).count()
    }

    /// Check structural sanity: exactly one king per side and no pawns on the
    /// first or eighth rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, p)| p.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self.pretty())?;
        write!(f, "}}")
    }
}

/// Renders a board as a labelled 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.0.get(sq))
                    .map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_layout() {
        let board = Board::starting_position();
        assert_eq!(board.get(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.get(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.get(Square::B1), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.get(Square::H7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Square::E4), None);
        assert_eq!(board.pieces().count(), 32);
        board.validate().unwrap();
    }

    #[test]
    fn set_and_take() {
        let mut board = Board::empty();
        board.set(Square::C3, Some(Piece::BLACK_BISHOP));
        assert_eq!(board.color_on(Square::C3), Some(Color::Black));
        assert_eq!(board.take(Square::C3), Some(Piece::BLACK_BISHOP));
        assert!(board.is_empty(Square::C3));
    }

    #[test]
    fn find_king_scans_and_tolerates_absence() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), Some(Square::E1));
        assert_eq!(board.find_king(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.set(Square::E8, None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        );
    }

    #[test]
    fn validate_rejects_back_rank_pawn() {
        let mut board = Board::starting_position();
        board.set(Square::A8, Some(Piece::WHITE_PAWN));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn pretty_print() {
        let output = Board::starting_position().pretty().to_string();
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
