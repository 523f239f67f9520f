//! Knight move generation.

use crate::attacks::KNIGHT_DELTAS;
use crate::chess_move::Move;
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, capturable};

/// Generate pseudo-legal moves for the knight on `from`.
pub(super) fn gen_knight(pos: &Position, from: Square, list: &mut MoveList) {
    let us = pos.side_to_move();
    for &(df, dr) in &KNIGHT_DELTAS {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match pos.piece_at(to) {
            None => list.push(Move::normal(from, to, PieceKind::Knight, None)),
            Some(target) if capturable(target, us) => {
                list.push(Move::normal(from, to, PieceKind::Knight, Some(target.kind())))
            }
            Some(_) => {}
        }
    }
}
