//! Castling rights and the fixed squares castling touches.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Squares of king start, king destination, rook start and rook destination.
    pub const fn squares(self, color: Color) -> CastleSquares {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => CastleSquares {
                king_from: Square::E1,
                king_to: Square::G1,
                rook_from: Square::H1,
                rook_to: Square::F1,
            },
            (Color::White, CastleSide::QueenSide) => CastleSquares {
                king_from: Square::E1,
                king_to: Square::C1,
                rook_from: Square::A1,
                rook_to: Square::D1,
            },
            (Color::Black, CastleSide::KingSide) => CastleSquares {
                king_from: Square::E8,
                king_to: Square::G8,
                rook_from: Square::H8,
                rook_to: Square::F8,
            },
            (Color::Black, CastleSide::QueenSide) => CastleSquares {
                king_from: Square::E8,
                king_to: Square::C8,
                rook_from: Square::A8,
                rook_to: Square::D8,
            },
        }
    }

    /// The side a king move from `from` to `to` would castle toward, judged by
    /// geometry alone.
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        CastleSide::ALL.into_iter().find(|side| {
            let s = side.squares(color);
            s.king_from == from && s.king_to == to
        })
    }
}

/// The four squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastleSquares {
    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> impl Iterator<Item = Square> {
        let (lo, hi) = if self.king_from < self.rook_from {
            (self.king_from, self.rook_from)
        } else {
            (self.rook_from, self.king_from)
        };
        let rank = lo.rank();
        (lo.file() + 1..hi.file()).filter_map(move |file| Square::from_coords(file, rank))
    }

    /// Squares the king stands on, crosses, or lands on; none may be attacked.
    pub fn king_path(&self) -> [Square; 3] {
        let step = if self.king_to > self.king_from { 1 } else { -1 };
        let transit = self.king_from.offset(step, 0).unwrap_or(self.king_from);
        [self.king_from, transit, self.king_to]
    }
}

/// Four independent castling flags: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    pub const WHITE_KING: CastlingRights = CastlingRights(0b0001);
    pub const WHITE_QUEEN: CastlingRights = CastlingRights(0b0010);
    pub const BLACK_KING: CastlingRights = CastlingRights(0b0100);
    pub const BLACK_QUEEN: CastlingRights = CastlingRights(0b1000);

    pub const WHITE_BOTH: CastlingRights = CastlingRights(0b0011);
    pub const BLACK_BOTH: CastlingRights = CastlingRights(0b1100);

    /// The flag for one color and wing.
    pub const fn flag(color: Color, side: CastleSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    #[inline]
    pub const fn with(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | other.0)
    }

    #[inline]
    pub const fn without(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & !other.0)
    }

    /// Rights lost when any move starts or ends on `sq`.
    ///
    /// Covers the king leaving its home square, a rook leaving its corner, and
    /// a rook being captured in its corner. Rights are never granted back.
    pub const fn revoked_by(sq: Square) -> CastlingRights {
        match sq.index() {
            4 => Self::WHITE_BOTH,
            0 => Self::WHITE_QUEEN,
            7 => Self::WHITE_KING,
            60 => Self::BLACK_BOTH,
            56 => Self::BLACK_QUEEN,
            63 => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }
}

impl fmt::Display for CastlingRights {
    /// FEN castling field: flags in `KQkq` order, or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({self})")
    }
}
