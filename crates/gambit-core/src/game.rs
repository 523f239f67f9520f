//! The game state machine: authoritative position, repetition history and move log.

use tracing::debug;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::movegen::{MoveList, generate_legal_moves};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::resolve::resolve_move;
use crate::san::{format_move_history, to_san};
use crate::square::Square;
use crate::status::{GameStatus, classify};

/// An applied move together with its SAN text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
}

/// Read-only summary of a game for display layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub fen: String,
    pub side_to_move: Color,
    pub status: GameStatus,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
    pub is_game_over: bool,
    /// SAN of every move played, in order.
    pub move_history: Vec<String>,
}

/// A game in progress.
///
/// [`Game::apply_move`] is the only way the position changes during play;
/// [`Game::reset`] and [`Game::load_fen`] replace it wholesale.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    /// Repetition keys: the starting position, then one per applied move.
    history: Vec<u64>,
    log: Vec<MoveRecord>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::from_position(Position::starting_position())
    }

    /// A game from an arbitrary position, with empty history.
    pub fn from_position(position: Position) -> Game {
        Game {
            history: vec![position.repetition_key()],
            position,
            log: Vec::new(),
        }
    }

    /// A game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        let position: Position = fen.parse()?;
        debug!(%fen, "game loaded from FEN");
        Ok(Game::from_position(position))
    }

    /// Return to the starting position and clear history.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    /// Replace the game with the position described by `fen`.
    ///
    /// On error the current game is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Game::from_fen(fen)?;
        Ok(())
    }

    /// Current position as FEN.
    pub fn fen(&self) -> String {
        self.position.to_string()
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn in_check(&self) -> bool {
        self.position.in_check()
    }

    /// Square of the side to move's king.
    pub fn king_square(&self) -> Option<Square> {
        self.position.king_square()
    }

    /// Legal moves for the side to move, optionally only those of the piece on `from`.
    pub fn legal_moves(&self, from: Option<Square>) -> MoveList {
        generate_legal_moves(&self.position, from)
    }

    /// Squares the piece on `from` may legally move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.legal_moves(Some(from)).destinations()
    }

    pub fn has_legal_moves_from(&self, from: Square) -> bool {
        !self.legal_moves(Some(from)).is_empty()
    }

    /// Check a move request without playing it.
    pub fn validate_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        resolve_move(&self.position, from, to, promotion)
    }

    /// Play a move request. On error nothing changes.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveError> {
        let mv = resolve_move(&self.position, from, to, promotion)?;
        let before = self.position;
        self.position = before.apply(&mv);
        self.history.push(self.position.repetition_key());

        let san = to_san(&mv, &before, &self.position);
        debug!(mv = %mv, san = %san, fen = %self.position, "move applied");
        self.log.push(MoveRecord { mv, san });
        Ok(mv)
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetition_count(&self) -> usize {
        let key = self.position.repetition_key();
        self.history.iter().filter(|&&k| k == key).count()
    }

    pub fn status(&self) -> GameStatus {
        classify(&self.position, self.repetition_count())
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_game_over()
    }

    /// Every applied move with its SAN, oldest first.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.log
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.log.last()
    }

    pub fn san_history(&self) -> Vec<String> {
        self.log.iter().map(|record| record.san.clone()).collect()
    }

    /// Numbered move pairs: `["1. e4 e5", "2. Nf3"]`.
    pub fn history_log(&self) -> Vec<String> {
        format_move_history(&self.san_history())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.status();
        GameSnapshot {
            fen: self.fen(),
            side_to_move: self.side_to_move(),
            status,
            is_check: self.in_check(),
            is_checkmate: status == GameStatus::Checkmate,
            is_stalemate: status == GameStatus::Stalemate,
            is_draw: status.is_draw(),
            is_game_over: status.is_game_over(),
            move_history: self.san_history(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::fen::STARTING_FEN;
    use crate::square::Square;
    use crate::status::GameStatus;

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.fen(), STARTING_FEN);
        assert_eq!(game.legal_moves(None).len(), 20);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.king_square(), Some(Square::E1));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn apply_records_san_and_history() {
        let mut game = Game::new();
        game.apply_move(Square::E2, Square::E4, None).unwrap();
        game.apply_move(Square::E7, Square::E5, None).unwrap();
        game.apply_move(Square::G1, Square::F3, None).unwrap();
        assert_eq!(game.san_history(), vec!["e4", "e5", "Nf3"]);
        assert_eq!(game.history_log(), vec!["1. e4 e5", "2. Nf3"]);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.last_move().map(|r| r.san.as_str()), Some("Nf3"));
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.fen();
        let err = game.apply_move(Square::E2, Square::E5, None).unwrap_err();
        assert!(matches!(err, MoveError::PatternNotPermitted { .. }));
        assert_eq!(game.fen(), before);
        assert!(game.moves().is_empty());
        assert_eq!(game.repetition_count(), 1);
    }

    #[test]
    fn validate_does_not_mutate() {
        let game = Game::new();
        let mv = game.validate_move(Square::G1, Square::F3, None).unwrap();
        assert_eq!(mv.to(), Square::F3);
        assert_eq!(game.fen(), STARTING_FEN);
    }

    #[test]
    fn load_fen_failure_keeps_game() {
        let mut game = Game::new();
        game.apply_move(Square::D2, Square::D4, None).unwrap();
        let before = game.fen();
        assert!(game.load_fen("not a fen").is_err());
        assert_eq!(game.fen(), before);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn load_fen_clears_history() {
        let mut game = Game::new();
        game.apply_move(Square::D2, Square::D4, None).unwrap();
        game.load_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
        assert!(game.moves().is_empty());
        assert_eq!(game.repetition_count(), 1);
        game.reset();
        assert_eq!(game.fen(), STARTING_FEN);
    }

    #[test]
    fn destination_helpers() {
        let game = Game::new();
        assert_eq!(game.legal_destinations(Square::B1), vec![Square::A3, Square::C3]);
        assert!(game.has_legal_moves_from(Square::E2));
        assert!(!game.has_legal_moves_from(Square::E1));
        assert!(!game.has_legal_moves_from(Square::E7));
    }

    #[test]
    fn snapshot_after_fools_mate() {
        let mut game = Game::new();
        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            game.apply_move(from, to, None).unwrap();
        }
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Checkmate);
        assert!(snap.is_check && snap.is_checkmate && snap.is_game_over);
        assert!(!snap.is_draw && !snap.is_stalemate);
        assert_eq!(snap.side_to_move, Color::White);
        assert_eq!(snap.move_history, vec!["f3", "e5", "g4", "Qh4#"]);
    }
}
