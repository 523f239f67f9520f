//! Attack map: which squares a side attacks, ignoring king safety.

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Knight jumps as (file, rank) deltas.
pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// King steps as (file, rank) deltas.
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Directions a sliding piece of `kind` moves in. Empty for non-sliders.
pub(crate) fn slide_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        (0, 1), (0, -1), (1, 0), (-1, 0),
        (1, 1), (1, -1), (-1, 1), (-1, -1),
    ];
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// First occupied square walking from `from` in direction `(df, dr)`.
fn first_blocker(board: &Board, from: Square, (df, dr): (i8, i8)) -> Option<(Square, Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(df, dr) {
        if let Some(piece) = board.get(next) {
            return Some((next, piece));
        }
        sq = next;
    }
    None
}

/// Return `true` if any piece of `by_color` attacks `sq`.
///
/// Attacks are traced backwards from the target: a knight pattern from `sq`
/// hitting an enemy knight means that knight attacks `sq`, and so on. Pawns
/// attack diagonally whether or not `sq` is occupied.
pub fn is_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    let knight = Piece::new(PieceKind::Knight, by_color);
    if KNIGHT_DELTAS
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .any(|from| board.get(from) == Some(knight))
    {
        return true;
    }

    let king = Piece::new(PieceKind::King, by_color);
    if KING_DELTAS
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .any(|from| board.get(from) == Some(king))
    {
        return true;
    }

    // A pawn of `by_color` attacks `sq` from one rank behind it, relative to its own direction.
    let pawn = Piece::new(PieceKind::Pawn, by_color);
    let behind = -by_color.forward();
    if [-1, 1]
        .into_iter()
        .filter_map(|df| sq.offset(df, behind))
        .any(|from| board.get(from) == Some(pawn))
    {
        return true;
    }

    let hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&dir| {
            matches!(
                first_blocker(board, sq, dir),
                Some((_, p)) if p.color() == by_color && (p.kind() == kind || p.kind() == PieceKind::Queen)
            )
        })
    };

    hits(&ROOK_DIRECTIONS, PieceKind::Rook) || hits(&BISHOP_DIRECTIONS, PieceKind::Bishop)
}
