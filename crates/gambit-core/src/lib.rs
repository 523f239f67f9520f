//! Chess rules engine: board state, legal move generation, move validation,
//! draw detection, and FEN / SAN notation.

mod attacks;
mod board;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod perft;
mod piece;
mod position;
mod resolve;
pub mod rules;
mod san;
mod square;
mod status;
mod zobrist;

pub use attacks::is_attacked;
pub use board::{Board, PrettyBoard};
pub use castling::{CastleSide, CastleSquares, CastlingRights};
pub use chess_move::{Move, MoveFlags, parse_coordinate};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameSnapshot, MoveRecord};
pub use movegen::{MoveList, generate_legal_moves, generate_pseudo_legal};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::Position;
pub use resolve::resolve_move;
pub use san::{describe_move, format_move_history, to_san};
pub use square::Square;
pub use status::{FIFTY_MOVE_LIMIT, GameStatus, REPETITION_LIMIT, insufficient_material};
