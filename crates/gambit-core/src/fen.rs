//! FEN string parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN ranks go from 8 to 1 (top to bottom)
        let rank = 7 - rank_index as u8;
        let printed_rank = rank as usize + 1;
        let mut length: usize = 0;
        let mut after_digit = false;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                // Adjacent digits ("44") are not canonical FEN.
                if !(1..=8).contains(&digit) || after_digit {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                length += digit as usize;
                after_digit = true;
                continue;
            }
            after_digit = false;

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(length as u8, rank).ok_or(FenError::BadRankLength {
                rank: printed_rank,
                length: length + 1,
            })?;
            board.set(sq, Some(piece));
            length += 1;
        }

        if length != 8 {
            return Err(FenError::BadRankLength {
                rank: printed_rank,
                length,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    if field == "-" {
        return Ok(CastlingRights::NONE);
    }
    if field.is_empty() {
        return Err(invalid());
    }

    let mut rights = CastlingRights::NONE;
    for c in field.chars() {
        let flag = match c {
            'K' => CastlingRights::WHITE_KING,
            'Q' => CastlingRights::WHITE_QUEEN,
            'k' => CastlingRights::BLACK_KING,
            'q' => CastlingRights::BLACK_QUEEN,
            _ => return Err(invalid()),
        };
        if rights.contains(flag) {
            return Err(invalid());
        }
        rights = rights.with(flag);
    }
    Ok(rights)
}

/// The target must be empty, with the opponent's double-pushed pawn in front
/// of it and that pawn's start square behind it empty.
fn parse_en_passant(
    field: &str,
    side_to_move: Color,
    board: &Board,
) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq = Square::from_algebraic(field).ok_or_else(invalid)?;
    // The target sits behind the pawn that just moved two squares.
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(invalid());
    }

    let forward = side_to_move.forward();
    let pushed = sq.offset(0, -forward).and_then(|s| board.get(s));
    let start_empty = sq.offset(0, forward).is_some_and(|s| board.is_empty(s));
    if !board.is_empty(sq)
        || pushed != Some(Piece::new(PieceKind::Pawn, side_to_move.flip()))
        || !start_empty
    {
        return Err(invalid());
    }
    Ok(Some(sq))
}

/// A move counter: plain ASCII digits, no sign, no leading zeros.
fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    };
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if !canonical {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = parse_castling(fields[2])?;
        let en_passant = parse_en_passant(fields[3], side_to_move, &board)?;

        let halfmove_clock = parse_counter("halfmove clock", fields[4])?;
        let fullmove_number = parse_counter("fullmove number", fields[5])?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fields[5].to_string(),
            });
        }

        board.validate()?;

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;

            for file in 0u8..8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
