//! Resolving submitted `(from, to, promotion)` requests against the legal list.

use tracing::trace;

use crate::attacks::slide_directions;
use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::movegen::{generate_legal_moves, generate_pseudo_legal};
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Resolve a move request into the engine's own [`Move`].
///
/// A missing promotion piece on a promoting move defaults to a queen. On
/// failure the returned [`MoveError`] names the first rule the request breaks.
pub fn resolve_move(
    pos: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, MoveError> {
    let result = try_resolve(pos, from, to, promotion);
    if let Err(err) = &result {
        trace!(%from, %to, reason = err.tag(), "move request rejected");
    }
    result
}

fn try_resolve(
    pos: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, MoveError> {
    let us = pos.side_to_move();
    let piece = pos.piece_at(from).ok_or(MoveError::NoPieceAtSource(from))?;
    if piece.color() != us {
        return Err(MoveError::WrongSideToMove(from));
    }
    if pos.board().color_on(to) == Some(us) {
        return Err(MoveError::DestinationOccupiedByOwnPiece(to));
    }
    if pos.piece_at(to).is_some_and(|p| p.kind() == PieceKind::King) {
        return Err(MoveError::PatternNotPermitted { from, to });
    }
    if promotion.is_some_and(|kind| !kind.is_promotion_choice()) {
        return Err(MoveError::MissingPromotionChoice);
    }

    // Judged by geometry so a blocked push reads the same with or without a piece.
    let promotes = piece.kind() == PieceKind::Pawn && to.rank() == us.promotion_rank();
    let promotion = match (promotion, promotes) {
        (None, true) => Some(PieceKind::Queen),
        (Some(_), false) => return Err(MoveError::PatternNotPermitted { from, to }),
        (requested, _) => requested,
    };

    let pseudo = generate_pseudo_legal(pos, Some(from));
    let legal = generate_legal_moves(pos, Some(from));
    if let Some(mv) = legal.find(from, to, promotion) {
        return Ok(mv);
    }
    if pseudo.find(from, to, promotion).is_some() {
        return Err(MoveError::LeavesKingInCheck);
    }

    if piece.kind() == PieceKind::King
        && let Some(side) = CastleSide::from_king_move(us, from, to)
    {
        return Err(if pos.castling().has(us, side) {
            MoveError::CastlingPathAttackedOrBlocked
        } else {
            MoveError::CastlingRightsRevoked
        });
    }

    if reachable_on_empty_board(pos, piece.kind(), from, to) {
        Err(MoveError::BlockedPath { from, to })
    } else {
        Err(MoveError::PatternNotPermitted { from, to })
    }
}

/// Return `true` if `kind` could travel `from -> to` with every square in
/// between cleared. Only meaningful for moves the generator already refused,
/// so a `true` here means something stands in the way.
fn reachable_on_empty_board(pos: &Position, kind: PieceKind, from: Square, to: Square) -> bool {
    let df = to.file() as i8 - from.file() as i8;
    let dr = to.rank() as i8 - from.rank() as i8;
    match kind {
        PieceKind::Pawn => {
            let us = pos.side_to_move();
            let forward = us.forward();
            // Straight pushes only; a diagonal without a victim is a pattern error.
            df == 0 && (dr == forward || (dr == 2 * forward && from.rank() == us.pawn_rank()))
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let steps = df.abs().max(dr.abs());
            steps > 0
                && (df == 0 || dr == 0 || df.abs() == dr.abs())
                && slide_directions(kind).contains(&(df.signum(), dr.signum()))
        }
        PieceKind::Knight | PieceKind::King => false,
    }
}
