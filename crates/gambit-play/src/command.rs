//! Protocol command parsing.

use std::fmt;
use std::str::FromStr;

use gambit_core::{PieceKind, Position, Square, parse_coordinate};

use crate::error::PlayError;

/// A `(from, to, promotion)` request in coordinate notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for MoveRequest {
    type Err = PlayError;

    fn from_str(text: &str) -> Result<MoveRequest, PlayError> {
        let (from, to, promotion) = parse_coordinate(text).ok_or_else(|| PlayError::InvalidMove {
            text: text.to_string(),
        })?;
        Ok(MoveRequest {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// Starting position plus the moves to replay from it.
#[derive(Debug, Clone)]
pub struct PositionSetup {
    pub start: Position,
    pub moves: Vec<MoveRequest>,
}

/// Options adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Reseed the random selector.
    Seed(u64),
    /// Answer each accepted `move` with a selected reply.
    AutoReply(bool),
}

/// A parsed protocol command.
#[derive(Debug)]
pub enum Command {
    /// `newgame` -- reset to the starting position.
    NewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(PositionSetup),
    /// `fen` -- print the current FEN.
    Fen,
    /// `board` -- print the board grid.
    Board,
    /// `moves [square]` -- list legal moves.
    Moves(Option<Square>),
    /// `move <coord>` -- play a move.
    Move(MoveRequest),
    /// `go` -- let the selector pick and play a move.
    Go,
    /// `status` -- print the game status tag.
    Status,
    /// `history` -- print the numbered move list.
    History,
    /// `setoption name <id> value <x>`.
    SetOption(SessionOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "newgame" => Ok(Command::NewGame),
        "fen" => Ok(Command::Fen),
        "board" => Ok(Command::Board),
        "go" => Ok(Command::Go),
        "status" => Ok(Command::Status),
        "history" => Ok(Command::History),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "moves" => parse_moves(args),
        "move" => {
            let text = args.first().ok_or(PlayError::MissingArgument { command: "move" })?;
            Ok(Command::Move(text.parse()?))
        }
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, PlayError> {
    let (start, rest) = match tokens.first() {
        Some(&"startpos") => (Position::starting_position(), &tokens[1..]),
        Some(&"fen") => {
            // Everything up to `moves` is the FEN; the parser checks the field count.
            let end = tokens.iter().position(|&t| t == "moves").unwrap_or(tokens.len());
            let fen = tokens[1..end].join(" ");
            let start = fen
                .parse::<Position>()
                .map_err(|source| PlayError::InvalidFen { fen, source })?;
            (start, &tokens[end..])
        }
        _ => return Err(PlayError::MalformedPosition),
    };

    let moves = match rest.split_first() {
        Some((&"moves", list)) => list
            .iter()
            .map(|text| text.parse())
            .collect::<Result<Vec<MoveRequest>, PlayError>>()?,
        Some(_) => return Err(PlayError::MalformedPosition),
        None => Vec::new(),
    };

    Ok(Command::Position(PositionSetup { start, moves }))
}

fn parse_moves(tokens: &[&str]) -> Result<Command, PlayError> {
    match tokens.first() {
        None => Ok(Command::Moves(None)),
        Some(text) => {
            let sq = Square::from_algebraic(text).ok_or_else(|| PlayError::InvalidSquare {
                text: text.to_string(),
            })?;
            Ok(Command::Moves(Some(sq)))
        }
    }
}

/// Parse `setoption name <id> value <x>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, PlayError> {
    let (name, value) = match tokens {
        ["name", name, "value", value] => (*name, *value),
        ["name", name] => (*name, ""),
        _ => return Err(PlayError::MissingArgument { command: "setoption" }),
    };

    let invalid = || PlayError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "seed" => SessionOption::Seed(value.parse().map_err(|_| invalid())?),
        "autoreply" => SessionOption::AutoReply(match value {
            "true" | "on" => true,
            "false" | "off" => false,
            _ => return Err(invalid()),
        }),
        _ => {
            return Err(PlayError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("newgame").unwrap(), Command::NewGame));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("go").unwrap(), Command::Go));
        assert!(matches!(parse_command("status").unwrap(), Command::Status));
        assert!(matches!(parse_command("history").unwrap(), Command::History));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(setup) => {
                assert_eq!(setup.start, Position::starting_position());
                assert!(setup.moves.is_empty());
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position(setup) => {
                let texts: Vec<String> = setup.moves.iter().map(|m| m.to_string()).collect();
                assert_eq!(texts, vec!["e2e4", "e7e5"]);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1 moves e7e5",
        )
        .unwrap();
        match cmd {
            Command::Position(setup) => {
                assert_eq!(
                    setup.start.to_string(),
                    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
                );
                assert_eq!(setup.moves.len(), 1);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position"), Err(PlayError::MalformedPosition)));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(PlayError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("position startpos moves e2e9"),
            Err(PlayError::InvalidMove { .. })
        ));
        assert!(matches!(
            parse_command("position startpos e2e4"),
            Err(PlayError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_move_and_moves() {
        match parse_command("move e7e8q").unwrap() {
            Command::Move(req) => {
                assert_eq!(req.from, Square::E7);
                assert_eq!(req.promotion, Some(PieceKind::Queen));
            }
            other => panic!("expected Move, got {other:?}"),
        }
        assert!(matches!(parse_command("move"), Err(PlayError::MissingArgument { .. })));
        assert!(matches!(parse_command("move xx"), Err(PlayError::InvalidMove { .. })));
        assert!(matches!(parse_command("moves").unwrap(), Command::Moves(None)));
        assert!(matches!(
            parse_command("moves g1").unwrap(),
            Command::Moves(Some(Square::G1))
        ));
        assert!(matches!(parse_command("moves z9"), Err(PlayError::InvalidSquare { .. })));
    }

    #[test]
    fn parse_setoption_values() {
        assert!(matches!(
            parse_command("setoption name Seed value 42").unwrap(),
            Command::SetOption(SessionOption::Seed(42))
        ));
        assert!(matches!(
            parse_command("setoption name autoreply value true").unwrap(),
            Command::SetOption(SessionOption::AutoReply(true))
        ));
        assert!(matches!(
            parse_command("setoption name Seed value abc"),
            Err(PlayError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            parse_command("setoption name Hash value 16"),
            Err(PlayError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption"),
            Err(PlayError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }
}
