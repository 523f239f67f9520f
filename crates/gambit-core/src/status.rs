//! Game outcome classification.

use std::fmt;

use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::piece::PieceKind;
use crate::position::Position;

/// Halfmove clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_LIMIT: u16 = 100;

/// Occurrences of one position that make a repetition draw.
pub const REPETITION_LIMIT: usize = 3;

/// The derived state of a game. Never stored; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawByFiftyMove,
    DrawByInsufficientMaterial,
    DrawByRepetition,
}

impl GameStatus {
    /// Kebab-case name used in protocol replies.
    pub const fn tag(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawByFiftyMove => "draw-by-fifty-move",
            GameStatus::DrawByInsufficientMaterial => "draw-by-insufficient-material",
            GameStatus::DrawByRepetition => "draw-by-repetition",
        }
    }

    /// Stalemate and the three rule-based draws.
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByFiftyMove
                | GameStatus::DrawByInsufficientMaterial
                | GameStatus::DrawByRepetition
        )
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate) || self.is_draw()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classify `pos`, given how often its repetition key has occurred so far.
///
/// Priority: checkmate, stalemate, insufficient material, fifty-move,
/// repetition, check, ongoing.
pub(crate) fn classify(pos: &Position, occurrences: usize) -> GameStatus {
    let in_check = pos.in_check();
    let no_moves = generate_legal_moves(pos, None).is_empty();

    if no_moves {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if insufficient_material(pos.board()) {
        return GameStatus::DrawByInsufficientMaterial;
    }
    if pos.halfmove_clock() >= FIFTY_MOVE_LIMIT {
        return GameStatus::DrawByFiftyMove;
    }
    if occurrences >= REPETITION_LIMIT {
        return GameStatus::DrawByRepetition;
    }
    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

/// Return `true` if neither side can possibly deliver mate.
///
/// Covers bare kings, a single minor piece, and any number of bishops all
/// standing on squares of one color.
pub fn insufficient_material(board: &Board) -> bool {
    let mut minors = 0usize;
    let mut bishop_colors = [false; 2];
    let mut only_bishops = true;

    for (sq, piece) in board.pieces() {
        match piece.kind() {
            PieceKind::King => {}
            PieceKind::Knight => {
                minors += 1;
                only_bishops = false;
            }
            PieceKind::Bishop => {
                minors += 1;
                bishop_colors[sq.is_light() as usize] = true;
            }
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match minors {
        0 | 1 => true,
        _ => only_bishops && !(bishop_colors[0] && bishop_colors[1]),
    }
}
