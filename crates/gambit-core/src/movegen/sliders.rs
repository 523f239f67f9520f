//! Bishop, rook and queen move generation.

use crate::attacks::slide_directions;
use crate::chess_move::Move;
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::{MoveList, capturable};

/// Generate pseudo-legal moves for the slider of `kind` on `from`.
///
/// Each ray stops at the first occupied square, which is included as a
/// capture when it holds an enemy piece other than the king.
pub(super) fn gen_slider(pos: &Position, from: Square, kind: PieceKind, list: &mut MoveList) {
    let us = pos.side_to_move();
    for &(df, dr) in slide_directions(kind) {
        let mut sq = from;
        while let Some(to) = sq.offset(df, dr) {
            match pos.piece_at(to) {
                None => list.push(Move::normal(from, to, kind, None)),
                Some(target) => {
                    if capturable(target, us) {
                        list.push(Move::normal(from, to, kind, Some(target.kind())));
                    }
                    break;
                }
            }
            sq = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_slider;
    use crate::movegen::MoveList;
    use crate::piece::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn slider_moves(fen: &str, from: Square, kind: PieceKind) -> MoveList {
        let pos: Position = fen.parse().unwrap();
        let mut list = MoveList::new();
        gen_slider(&pos, from, kind, &mut list);
        list
    }

    #[test]
    fn rook_on_empty_board() {
        let moves = slider_moves("4k3/8/8/8/3R4/8/8/K7 w - - 0 1", Square::D4, PieceKind::Rook);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn bishop_stops_at_pieces() {
        // Friendly pawn on f6 blocks, enemy pawn on b2 is captured.
        let moves = slider_moves("4k3/8/5P2/8/3B4/8/1p6/4K3 w - - 0 1", Square::D4, PieceKind::Bishop);
        let dests = moves.destinations();
        assert!(dests.contains(&Square::E5));
        assert!(!dests.contains(&Square::F6));
        assert!(dests.contains(&Square::B2));
        assert!(!dests.contains(&Square::A1));
        assert!(moves.find(Square::D4, Square::B2, None).unwrap().is_capture());
    }

    #[test]
    fn rook_stops_short_of_enemy_king() {
        let moves = slider_moves("4k2R/8/8/8/8/8/8/4K3 w - - 0 1", Square::H8, PieceKind::Rook);
        assert_eq!(moves.len(), 9);
        assert!(!moves.destinations().contains(&Square::E8));
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn queen_combines_both() {
        let moves = slider_moves("7k/8/8/8/3Q4/8/8/1K6 w - - 0 1", Square::D4, PieceKind::Queen);
        assert_eq!(moves.len(), 27);
    }
}
