//! Complete game position: placement plus side to move, castling, en passant, and clocks.

use tracing::trace;

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::castling::CastlingRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::zobrist;

/// The authoritative state of a game at one moment.
///
/// `Position` is `Copy`: snapshots handed to collaborators and scratch copies
/// used for legality testing are plain value copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Position {
    /// The standard initial position.
    pub fn starting_position() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a position from its parts. Used by FEN parsing.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Position {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Square skipped by the previous move's double pawn push, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after each Black move.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Square of the side to move's king, if present.
    pub fn king_square(&self) -> Option<Square> {
        self.board.find_king(self.side_to_move)
    }

    /// Return `true` if the side to move's king is attacked.
    ///
    /// A board without that king is reported as not in check.
    pub fn in_check(&self) -> bool {
        self.king_attacked(self.side_to_move)
    }

    /// Return `true` if `color`'s king stands on an attacked square.
    pub(crate) fn king_attacked(&self, color: Color) -> bool {
        match self.board.find_king(color) {
            Some(king) => is_attacked(&self.board, king, color.flip()),
            None => false,
        }
    }

    /// Repetition key: placement, side, castling, and en passant. Clocks are ignored.
    pub fn repetition_key(&self) -> u64 {
        zobrist::hash_position(self)
    }

    /// Apply `mv` and return the resulting position. Copy-make: `self` is untouched.
    ///
    /// `mv` must have been generated for this position; the board effects of
    /// castling, en passant, and promotion follow from its flags.
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move;
        let them = us.flip();
        let (from, to) = (mv.from(), mv.to());

        let moving = next.board.take(from);
        let placed = match mv.promotion() {
            Some(kind) => Some(Piece::new(kind, us)),
            None => moving,
        };

        if mv.is_en_passant() {
            // The captured pawn sits beside the mover, on the mover's rank.
            if let Some(victim) = Square::from_coords(to.file(), from.rank()) {
                next.board.set(victim, None);
            }
        }

        if let Some(side) = mv.castle_side() {
            let squares = side.squares(us);
            let rook = next.board.take(squares.rook_from);
            next.board.set(squares.rook_to, rook);
        }

        next.board.set(to, placed);

        next.castling = next
            .castling
            .without(CastlingRights::revoked_by(from))
            .without(CastlingRights::revoked_by(to));

        next.en_passant = if mv.is_double_push() {
            from.offset(0, us.forward())
        } else {
            None
        };

        next.halfmove_clock = if mv.piece() == PieceKind::Pawn || mv.is_capture() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        if us == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        next.side_to_move = them;

        trace!(mv = %mv, "applied move to scratch position");
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}
