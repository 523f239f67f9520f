//! Stateless rules API over explicit [`Position`] values.
//!
//! These mirror the [`Game`](crate::Game) operations for callers that keep
//! their own state. Without a move history, [`status`] never reports a
//! repetition draw.

use crate::chess_move::Move;
use crate::error::{FenError, MoveError};
use crate::movegen::{MoveList, generate_legal_moves};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::resolve::resolve_move;
use crate::square::Square;
use crate::status::{GameStatus, classify};

pub fn new_game() -> Position {
    Position::starting_position()
}

pub fn load_fen(fen: &str) -> Result<Position, FenError> {
    fen.parse()
}

pub fn to_fen(pos: &Position) -> String {
    pos.to_string()
}

pub fn legal_moves(pos: &Position, from: Option<Square>) -> MoveList {
    generate_legal_moves(pos, from)
}

/// Resolve and play a request, returning the new position and the move played.
pub fn apply_move(
    pos: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<(Position, Move), MoveError> {
    let mv = resolve_move(pos, from, to, promotion)?;
    Ok((pos.apply(&mv), mv))
}

pub fn status(pos: &Position) -> GameStatus {
    classify(pos, 1)
}

pub fn piece_at(pos: &Position, sq: Square) -> Option<Piece> {
    pos.piece_at(sq)
}

pub fn to_san(mv: &Move, before: &Position, after: &Position) -> String {
    crate::san::to_san(mv, before, after)
}
