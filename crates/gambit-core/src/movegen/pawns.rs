//! Pawn move generation.

use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, capturable};

/// Push `from -> to`, expanding into one move per promotion kind on the last rank.
fn push_maybe_promoting(
    list: &mut MoveList,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    promotes: bool,
) {
    if promotes {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::promote(from, to, kind, captured));
        }
    } else {
        list.push(Move::normal(from, to, PieceKind::Pawn, captured));
    }
}

/// Generate pseudo-legal moves for the pawn on `from`.
pub(super) fn gen_pawn(pos: &Position, from: Square, list: &mut MoveList) {
    let us = pos.side_to_move();
    let board = pos.board();
    let forward = us.forward();
    let promotion_rank = us.promotion_rank();
    let enemy_pawn = Piece::new(PieceKind::Pawn, us.flip());

    // --- Pushes ---
    if let Some(one) = from.offset(0, forward)
        && board.is_empty(one)
    {
        push_maybe_promoting(list, from, one, None, one.rank() == promotion_rank);

        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && board.is_empty(two)
        {
            list.push(Move::double_push(from, two));
        }
    }

    // --- Captures ---
    for df in [-1, 1] {
        let Some(to) = from.offset(df, forward) else {
            continue;
        };
        match board.get(to) {
            Some(target) if capturable(target, us) => {
                push_maybe_promoting(
                    list,
                    from,
                    to,
                    Some(target.kind()),
                    to.rank() == promotion_rank,
                );
            }
            // The victim stands beside the mover and must be the pawn that double-pushed.
            None if pos.en_passant() == Some(to)
                && Square::from_coords(to.file(), from.rank()).and_then(|sq| board.get(sq))
                    == Some(enemy_pawn) =>
            {
                list.push(Move::en_passant(from, to));
            }
            _ => {}
        }
    }
}
