//! Legality filter over pseudo-legal candidates.

use tracing::trace;

use crate::position::Position;
use crate::square::Square;

use super::{MoveList, generate_pseudo_legal};

/// Generate the legal moves for the side to move, optionally scoped to the
/// piece on `from`.
///
/// Every candidate is applied to a scratch copy of `pos`; it survives only if
/// the mover's king is not attacked afterwards. A side without a king keeps
/// every candidate.
pub fn generate_legal_moves(pos: &Position, from: Option<Square>) -> MoveList {
    let us = pos.side_to_move();
    let mut list = generate_pseudo_legal(pos, from);
    list.retain(|mv| {
        let scratch = pos.apply(mv);
        let legal = !scratch.king_attacked(us);
        if !legal {
            trace!(mv = %mv, "candidate leaves king attacked");
        }
        legal
    });
    list
}
