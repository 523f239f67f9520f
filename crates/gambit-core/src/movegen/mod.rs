//! Move generation: per-piece pseudo-legal patterns plus the legality filter.

mod king;
mod knights;
mod legal;
mod pawns;
mod sliders;

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

pub use self::legal::generate_legal_moves;

/// Ordered list of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Keep only the moves for which `keep` returns `true`.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    /// The move answering `(from, to, promotion)`, if listed.
    pub fn find(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.moves.iter().copied().find(|m| m.matches(from, to, promotion))
    }

    /// Distinct destination squares, in generation order.
    pub fn destinations(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::new();
        for mv in &self.moves {
            if !squares.contains(&mv.to()) {
                squares.push(mv.to());
            }
        }
        squares
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Return `true` if `us` may capture `target`. Kings are never captured.
#[inline]
pub(super) fn capturable(target: Piece, us: Color) -> bool {
    target.color() != us && target.kind() != PieceKind::King
}

/// Generate pseudo-legal moves for the side to move, ignoring king safety.
///
/// With `from` set, only moves of the piece on that square are produced; an
/// empty square or an opposing piece yields an empty list.
pub fn generate_pseudo_legal(pos: &Position, from: Option<Square>) -> MoveList {
    let mut list = MoveList::new();
    let us = pos.side_to_move();

    let sources: Vec<(Square, PieceKind)> = match from {
        Some(sq) => pos
            .piece_at(sq)
            .filter(|p| p.color() == us)
            .map(|p| (sq, p.kind()))
            .into_iter()
            .collect(),
        None => pos
            .board()
            .pieces_of(us)
            .map(|(sq, p)| (sq, p.kind()))
            .collect(),
    };

    for (sq, kind) in sources {
        match kind {
            PieceKind::Pawn => gen_pawn(pos, sq, &mut list),
            PieceKind::Knight => gen_knight(pos, sq, &mut list),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                gen_slider(pos, sq, kind, &mut list)
            }
            PieceKind::King => gen_king(pos, sq, &mut list),
        }
    }

    list
}
