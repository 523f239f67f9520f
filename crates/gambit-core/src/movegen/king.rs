//! King step and castling generation.

use crate::attacks::{KING_DELTAS, is_attacked};
use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, capturable};

/// Generate pseudo-legal king steps and castling moves for the king on `from`.
///
/// Steps ignore king safety; the legality filter removes those. Castling is
/// only produced when it is fully legal on the current board, since the
/// filter alone cannot see an attacked transit square.
pub(super) fn gen_king(pos: &Position, from: Square, list: &mut MoveList) {
    let us = pos.side_to_move();
    for &(df, dr) in &KING_DELTAS {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        match pos.piece_at(to) {
            None => list.push(Move::normal(from, to, PieceKind::King, None)),
            Some(target) if capturable(target, us) => {
                list.push(Move::normal(from, to, PieceKind::King, Some(target.kind())))
            }
            Some(_) => {}
        }
    }

    for side in CastleSide::ALL {
        let squares = side.squares(us);
        if squares.king_from == from && can_castle(pos, side) {
            list.push(Move::castle(squares.king_from, squares.king_to, side));
        }
    }
}

/// Return `true` if the side to move may castle toward `side` right now.
///
/// Requires the right, king and rook on their home squares, empty squares
/// between them, and no attack on the king's start, transit or destination.
pub(super) fn can_castle(pos: &Position, side: CastleSide) -> bool {
    let us = pos.side_to_move();
    let board = pos.board();
    let squares = side.squares(us);

    if !pos.castling().has(us, side) {
        return false;
    }
    if board.get(squares.king_from) != Some(Piece::new(PieceKind::King, us))
        || board.get(squares.rook_from) != Some(Piece::new(PieceKind::Rook, us))
    {
        return false;
    }
    if squares.between().any(|sq| !board.is_empty(sq)) {
        return false;
    }
    squares
        .king_path()
        .iter()
        .all(|&sq| !is_attacked(board, sq, us.flip()))
}

#[cfg(test)]
mod tests {
    use super::{can_castle, gen_king};
    use crate::castling::CastleSide;
    use crate::movegen::MoveList;
    use crate::position::Position;
    use crate::square::Square;

    fn parse(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn king_moves(pos: &Position, from: Square) -> MoveList {
        let mut list = MoveList::new();
        gen_king(pos, from, &mut list);
        list
    }

    #[test]
    fn both_castles_available() {
        let pos = parse("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<_> = king_moves(&pos, Square::E1)
            .into_iter()
            .filter(|m| m.is_castle())
            .map(|m| m.to())
            .collect();
        assert_eq!(castles, vec![Square::G1, Square::C1]);
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 attacks f1.
        let pos = parse("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&pos, CastleSide::KingSide));
        assert!(can_castle(&pos, CastleSide::QueenSide));
    }

    #[test]
    fn no_castling_out_of_check() {
        let pos = parse("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&pos, CastleSide::KingSide));
        assert!(!can_castle(&pos, CastleSide::QueenSide));
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // Rook on b8 attacks b1, which the king never crosses.
        let pos = parse("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(can_castle(&pos, CastleSide::QueenSide));
        let pos = parse("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!can_castle(&pos, CastleSide::QueenSide));
    }

    #[test]
    fn right_without_rook_is_ignored() {
        let pos = parse("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
        assert!(king_moves(&pos, Square::E1).iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn black_castles_on_eighth_rank() {
        let pos = parse("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1");
        assert!(can_castle(&pos, CastleSide::KingSide));
        assert!(can_castle(&pos, CastleSide::QueenSide));
    }
}
