//! Resolved moves as produced by the move generator.

use std::fmt;
use std::ops::BitOr;

use crate::castling::CastleSide;
use crate::piece::PieceKind;
use crate::square::Square;

/// Set of special-move markers carried by a [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const KINGSIDE_CASTLE: MoveFlags = MoveFlags(1 << 3);
    pub const QUEENSIDE_CASTLE: MoveFlags = MoveFlags(1 << 4);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 5);

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (MoveFlags::CAPTURE, "capture"),
            (MoveFlags::DOUBLE_PUSH, "double-push"),
            (MoveFlags::EN_PASSANT, "en-passant"),
            (MoveFlags::KINGSIDE_CASTLE, "kingside-castle"),
            (MoveFlags::QUEENSIDE_CASTLE, "queenside-castle"),
            (MoveFlags::PROMOTION, "promotion"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "[{}]", set.join(", "))
    }
}

/// A move the engine has resolved against a position.
///
/// Callers never build these directly; they submit `(from, to, promotion)`
/// requests which the engine re-validates into a `Move`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: PieceKind,
    promotion: Option<PieceKind>,
    captured: Option<PieceKind>,
    flags: MoveFlags,
}

impl Move {
    /// A quiet move or ordinary capture.
    pub(crate) fn normal(
        from: Square,
        to: Square,
        piece: PieceKind,
        captured: Option<PieceKind>,
    ) -> Move {
        let flags = if captured.is_some() {
            MoveFlags::CAPTURE
        } else {
            MoveFlags::NONE
        };
        Move {
            from,
            to,
            piece,
            promotion: None,
            captured,
            flags,
        }
    }

    pub(crate) fn double_push(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            piece: PieceKind::Pawn,
            promotion: None,
            captured: None,
            flags: MoveFlags::DOUBLE_PUSH,
        }
    }

    pub(crate) fn en_passant(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            piece: PieceKind::Pawn,
            promotion: None,
            captured: Some(PieceKind::Pawn),
            flags: MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
        }
    }

    pub(crate) fn promote(
        from: Square,
        to: Square,
        promotion: PieceKind,
        captured: Option<PieceKind>,
    ) -> Move {
        let mut flags = MoveFlags::PROMOTION;
        if captured.is_some() {
            flags = flags | MoveFlags::CAPTURE;
        }
        Move {
            from,
            to,
            piece: PieceKind::Pawn,
            promotion: Some(promotion),
            captured,
            flags,
        }
    }

    pub(crate) fn castle(from: Square, to: Square, side: CastleSide) -> Move {
        let flags = match side {
            CastleSide::KingSide => MoveFlags::KINGSIDE_CASTLE,
            CastleSide::QueenSide => MoveFlags::QUEENSIDE_CASTLE,
        };
        Move {
            from,
            to,
            piece: PieceKind::King,
            promotion: None,
            captured: None,
            flags,
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// Kind of the moving piece (a pawn for promotions).
    #[inline]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub fn captured(&self) -> Option<PieceKind> {
        self.captured
    }

    #[inline]
    pub fn flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PUSH)
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    /// The wing castled toward, if this is a castling move.
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.flags.contains(MoveFlags::KINGSIDE_CASTLE) {
            Some(CastleSide::KingSide)
        } else if self.flags.contains(MoveFlags::QUEENSIDE_CASTLE) {
            Some(CastleSide::QueenSide)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle_side().is_some()
    }

    /// Return `true` if this move answers the request `(from, to, promotion)`.
    pub fn matches(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_coordinate(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} {:?})", self, self.piece, self.flags)
    }
}

/// Parse coordinate text such as `e2e4` or `b7b8q` into a move request.
///
/// Only the shape is checked. Any piece letter is accepted as the fifth
/// character; whether it is a valid promotion choice is decided by the engine.
pub fn parse_coordinate(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => Some(PieceKind::from_letter(c)?),
    };
    Some((from, to, promotion))
}
