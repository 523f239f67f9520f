//! Standard Algebraic Notation and human-readable move text.

use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::movegen::generate_legal_moves;
use crate::position::Position;

/// SAN for `mv`, played from `before` and producing `after`.
///
/// `before` supplies the other pieces that could reach the same square, for
/// disambiguation; `after` decides the `+` / `#` suffix.
pub fn to_san(mv: &Move, before: &Position, after: &Position) -> String {
    let mut san = String::with_capacity(8);

    match mv.castle_side() {
        Some(CastleSide::KingSide) => san.push_str("O-O"),
        Some(CastleSide::QueenSide) => san.push_str("O-O-O"),
        None => {
            match mv.piece().san_letter() {
                Some(letter) => {
                    san.push(letter);
                    push_disambiguation(&mut san, mv, before);
                }
                None if mv.is_capture() => san.push(mv.from().file_char()),
                None => {}
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            if let Some(kind) = mv.promotion() {
                san.push('=');
                san.push(kind.letter().to_ascii_uppercase());
            }
        }
    }

    if after.in_check() {
        let mated = generate_legal_moves(after, None).is_empty();
        san.push(if mated { '#' } else { '+' });
    }
    san
}

/// Append the file, rank, or both when another piece of the same kind can
/// legally reach the destination.
fn push_disambiguation(san: &mut String, mv: &Move, before: &Position) {
    let rivals: Vec<Move> = generate_legal_moves(before, None)
        .into_iter()
        .filter(|m| m.piece() == mv.piece() && m.to() == mv.to() && m.from() != mv.from())
        .collect();
    if rivals.is_empty() {
        return;
    }

    let from = mv.from();
    let shares_file = rivals.iter().any(|m| m.from().file() == from.file());
    let shares_rank = rivals.iter().any(|m| m.from().rank() == from.rank());
    if !shares_file {
        san.push(from.file_char());
    } else if !shares_rank {
        san.push(from.rank_char());
    } else {
        san.push(from.file_char());
        san.push(from.rank_char());
    }
}

/// Pair SAN moves into numbered lines: `["1. e4 e5", "2. Nf3"]`.
pub fn format_move_history<S: AsRef<str>>(sans: &[S]) -> Vec<String> {
    sans.chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white.as_ref(), black.as_ref()),
            [white] => format!("{}. {}", i + 1, white.as_ref()),
            _ => String::new(),
        })
        .collect()
}

/// Plain-English description, e.g. `Pawn from e7 to d8 captures Rook and promotes to Queen`.
pub fn describe_move(mv: &Move) -> String {
    let mut text = format!("{} from {} to {}", mv.piece().name(), mv.from(), mv.to());
    if let Some(captured) = mv.captured() {
        text.push_str(" captures ");
        text.push_str(captured.name());
    }
    if let Some(kind) = mv.promotion() {
        text.push_str(" and promotes to ");
        text.push_str(kind.name());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{describe_move, format_move_history, to_san};
    use crate::piece::PieceKind;
    use crate::position::Position;
    use crate::resolve::resolve_move;
    use crate::square::Square;

    fn san_of(fen: &str, from: Square, to: Square, promotion: Option<PieceKind>) -> String {
        let before: Position = fen.parse().unwrap();
        let mv = resolve_move(&before, from, to, promotion).unwrap();
        let after = before.apply(&mv);
        to_san(&mv, &before, &after)
    }

    #[test]
    fn pawn_and_piece_moves() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(san_of(start, Square::E2, Square::E4, None), "e4");
        assert_eq!(san_of(start, Square::G1, Square::F3, None), "Nf3");
    }

    #[test]
    fn captures() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
        assert_eq!(san_of(fen, Square::E4, Square::D5, None), "exd5");
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        assert_eq!(san_of(fen, Square::E5, Square::D6, None), "exd6");
        let fen = "4k3/8/8/3p4/8/4N3/8/4K3 w - - 0 1";
        assert_eq!(san_of(fen, Square::E3, Square::D5, None), "Nxd5");
    }

    #[test]
    fn castling() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, Square::E1, Square::G1, None), "O-O");
        assert_eq!(san_of(fen, Square::E1, Square::C1, None), "O-O-O");
    }

    #[test]
    fn disambiguation() {
        // Knights on b1 and f1 can both reach d2.
        let fen = "4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1";
        assert_eq!(san_of(fen, Square::B1, Square::D2, None), "Nbd2");
        // Rooks on a1 and a5 share a file.
        let fen = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san_of(fen, Square::A1, Square::A3, None), "R1a3");
        // Queens on a3 and c1 also reach b2, sharing the file and the rank of a1.
        let fen = "4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1";
        assert_eq!(san_of(fen, Square::A1, Square::B2, None), "Qa1b2");
    }

    #[test]
    fn promotion_and_check_suffixes() {
        let fen = "k7/1P6/8/8/8/8/8/K7 w - - 0 1";
        assert_eq!(san_of(fen, Square::B7, Square::B8, Some(PieceKind::Queen)), "b8=Q+");
        assert_eq!(san_of(fen, Square::B7, Square::B8, Some(PieceKind::Knight)), "b8=N");
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";
        assert_eq!(san_of(fen, Square::D8, Square::H4, None), "Qh4#");
    }

    #[test]
    fn history_pairs() {
        assert_eq!(format_move_history(&["e4", "e5", "Nf3"]), vec!["1. e4 e5", "2. Nf3"]);
        assert!(format_move_history::<&str>(&[]).is_empty());
    }

    #[test]
    fn descriptions() {
        let before: Position = "3r3k/4P3/8/8/8/8/8/K7 w - - 0 1".parse().unwrap();
        let mv = resolve_move(&before, Square::E7, Square::D8, Some(PieceKind::Queen)).unwrap();
        assert_eq!(describe_move(&mv), "Pawn from e7 to d8 captures Rook and promotes to Queen");
        let start = Position::starting_position();
        let mv = resolve_move(&start, Square::G1, Square::F3, None).unwrap();
        assert_eq!(describe_move(&mv), "Knight from g1 to f3");
    }
}
