//! Blocking protocol session over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Game, Move, MoveList};

use crate::command::{Command, MoveRequest, PositionSetup, SessionOption, parse_command};
use crate::error::PlayError;
use crate::strategy::{MoveSelector, RandomSelector};

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the random selector; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Answer each accepted `move` with a selected reply.
    pub auto_reply: bool,
}

/// What the read loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

/// One game driven by protocol commands.
pub struct Session {
    game: Game,
    config: SessionConfig,
    selector: Box<dyn MoveSelector>,
}

impl Session {
    /// A session using a [`RandomSelector`] seeded from `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_selector(config, Box::new(RandomSelector::new(config.seed)))
    }

    pub fn with_selector(config: SessionConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            game: Game::new(),
            config,
            selector,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `out`.
    ///
    /// Command errors are reported on `out` and the loop continues; only I/O
    /// failures end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), PlayError> {
        info!(selector = self.selector.name(), "session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let flow = match parse_command(trimmed).and_then(|cmd| self.handle(cmd, out)) {
                Ok(flow) => flow,
                Err(PlayError::Io { source }) => return Err(PlayError::Io { source }),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(out, "error {err}")?;
                    Flow::Continue
                }
            };
            out.flush()?;
            if let Flow::Quit = flow {
                break;
            }
        }
        info!("session finished");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, PlayError> {
        match cmd {
            Command::NewGame => {
                self.game.reset();
                writeln!(out, "ok")?;
            }
            Command::Position(setup) => {
                self.game = replay(setup)?;
                writeln!(out, "ok")?;
            }
            Command::Fen => writeln!(out, "{}", self.game.fen())?,
            Command::Board => writeln!(out, "{}", self.game.position().board().pretty())?,
            Command::Moves(from) => {
                let moves = self.game.legal_moves(from);
                writeln!(out, "{}", format_moves(&moves))?;
            }
            Command::Move(request) => self.handle_move(request, out)?,
            Command::Go => {
                let reply = self.select_and_play();
                match reply {
                    Some(mv) => writeln!(out, "bestmove {mv}")?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            Command::Status => writeln!(out, "status {}", self.game.status())?,
            Command::History => {
                for line in self.game.history_log() {
                    writeln!(out, "{line}")?;
                }
            }
            Command::SetOption(option) => self.apply_option(option),
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(_) => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(&mut self, request: MoveRequest, out: &mut W) -> Result<(), PlayError> {
        if let Err(err) = self.game.apply_move(request.from, request.to, request.promotion) {
            debug!(%request, reason = err.tag(), "move rejected");
            writeln!(out, "illegal {}", err.tag())?;
            return Ok(());
        }
        write_last_move(&self.game, "played", out)?;
        writeln!(out, "status {}", self.game.status())?;

        if self.config.auto_reply && !self.game.is_game_over() && self.select_and_play().is_some() {
            write_last_move(&self.game, "reply", out)?;
            writeln!(out, "status {}", self.game.status())?;
        }
        Ok(())
    }

    /// Let the selector choose among the legal moves and play its choice.
    fn select_and_play(&mut self) -> Option<Move> {
        let moves = self.game.legal_moves(None);
        let mv = self.selector.select(self.game.position(), &moves)?;
        match self.game.apply_move(mv.from(), mv.to(), mv.promotion()) {
            Ok(played) => Some(played),
            Err(err) => {
                warn!(mv = %mv, error = %err, "selector chose an unplayable move");
                None
            }
        }
    }

    fn apply_option(&mut self, option: SessionOption) {
        match option {
            SessionOption::Seed(seed) => {
                self.config.seed = Some(seed);
                self.selector.reseed(seed);
            }
            SessionOption::AutoReply(on) => self.config.auto_reply = on,
        }
        debug!(config = ?self.config, "session option updated");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Build a game from `setup`, replaying its moves. Fails on the first illegal move.
fn replay(setup: PositionSetup) -> Result<Game, PlayError> {
    let mut game = Game::from_position(setup.start);
    for request in setup.moves {
        game.apply_move(request.from, request.to, request.promotion)
            .map_err(|source| PlayError::IllegalMove {
                text: request.to_string(),
                source,
            })?;
    }
    Ok(game)
}

fn format_moves(moves: &MoveList) -> String {
    let mut line = String::from("moves");
    for mv in moves {
        line.push(' ');
        line.push_str(&mv.to_coordinate());
    }
    line
}

fn write_last_move<W: Write>(game: &Game, label: &str, out: &mut W) -> Result<(), PlayError> {
    if let Some(record) = game.last_move() {
        writeln!(out, "{label} {}", record.san)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::FirstMoveSelector;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn first_move_session() -> Session {
        Session::with_selector(SessionConfig::default(), Box::new(FirstMoveSelector))
    }

    #[test]
    fn move_and_status_replies() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "move e2e4\nmove e2e4\nstatus\n");
        assert_eq!(out, "played e4\nstatus ongoing\nillegal no-piece-at-source\nstatus ongoing\n");
    }

    #[test]
    fn position_command_replays_moves() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "position startpos moves e2e4 e7e5\nfen\nhistory\n");
        assert_eq!(
            out,
            "ok\nrnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2\n1. e4 e5\n"
        );
    }

    #[test]
    fn illegal_replay_keeps_previous_game() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "move d2d4\nposition startpos moves e2e5\nfen\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with("error illegal move e2e5"));
        assert_eq!(lines[3], "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 1");
    }

    #[test]
    fn go_plays_selected_move() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "go\n");
        let expected = session.game().moves()[0].mv.to_coordinate();
        assert_eq!(out, format!("bestmove {expected}\n"));
    }

    #[test]
    fn go_without_moves_reports_null() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "position fen k7/2Q5/1K6/8/8/8/8/8 b - - 0 1\ngo\nstatus\n");
        assert_eq!(out, "ok\nbestmove 0000\nstatus stalemate\n");
    }

    #[test]
    fn auto_reply_answers_moves() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "setoption name AutoReply value true\nmove e2e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "played e4");
        assert_eq!(lines[1], "status ongoing");
        assert!(lines[2].starts_with("reply "));
        assert_eq!(lines[3], "status ongoing");
        assert_eq!(session.game().moves().len(), 2);
        assert!(session.config().auto_reply);
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "quit\nmove e2e4\n");
        assert!(out.is_empty());
        assert!(session.game().moves().is_empty());
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "setoption name Hash value 1\nmoves z9\n");
        assert_eq!(out, "error unknown option: Hash\nerror invalid square: z9\n");
    }

    #[test]
    fn moves_lists_coordinates() {
        let mut session = first_move_session();
        let out = run_script(&mut session, "moves g1\n");
        assert_eq!(out, "moves g1f3 g1h3\n");
    }
}
