//! Error types for FEN parsing, board validation, and move submission.

use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (8 for the first FEN rank).
        rank: usize,
        length: usize,
    },

    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    /// The active color field is not `w` or `b`.
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    /// The castling field is not `-` or a repetition-free subset of `KQkq`.
    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling { found: String },

    /// The en passant field is not `-` or a square on the correct rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// A move counter is not a number in range.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// `"halfmove clock"` or `"fullmove number"`.
        field: &'static str,
        found: String,
    },

    /// The placement parsed but fails structural validation.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Structural problems with a board layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: usize },

    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Why a submitted `(from, to, promotion)` request was rejected.
///
/// Every variant leaves the position untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPieceAtSource(Square),

    #[error("the piece on {0} belongs to the side not on move")]
    WrongSideToMove(Square),

    #[error("that piece cannot move from {from} to {to}")]
    PatternNotPermitted { from: Square, to: Square },

    #[error("the path from {from} to {to} is blocked")]
    BlockedPath { from: Square, to: Square },

    #[error("{0} is occupied by a friendly piece")]
    DestinationOccupiedByOwnPiece(Square),

    #[error("the move would leave the king in check")]
    LeavesKingInCheck,

    #[error("castling rights for that side have been lost")]
    CastlingRightsRevoked,

    #[error("castling is blocked or passes through an attacked square")]
    CastlingPathAttackedOrBlocked,

    #[error("a valid promotion piece (q, r, b or n) is required")]
    MissingPromotionChoice,
}

impl MoveError {
    /// Short kebab-case tag for protocol replies.
    pub const fn tag(&self) -> &'static str {
        match self {
            MoveError::NoPieceAtSource(_) => "no-piece-at-source",
            MoveError::WrongSideToMove(_) => "wrong-side-to-move",
            MoveError::PatternNotPermitted { .. } => "pattern-not-permitted",
            MoveError::BlockedPath { .. } => "blocked-path",
            MoveError::DestinationOccupiedByOwnPiece(_) => "destination-occupied-by-own-piece",
            MoveError::LeavesKingInCheck => "leaves-king-in-check",
            MoveError::CastlingRightsRevoked => "castling-rights-revoked",
            MoveError::CastlingPathAttackedOrBlocked => "castling-path-attacked-or-blocked",
            MoveError::MissingPromotionChoice => "missing-promotion-choice",
        }
    }
}
