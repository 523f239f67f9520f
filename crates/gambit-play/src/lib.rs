//! Line-oriented play protocol and move selection for gambit.

pub mod command;
pub mod error;
pub mod session;
pub mod strategy;

pub use command::{Command, MoveRequest, PositionSetup, SessionOption, parse_command};
pub use error::PlayError;
pub use session::{Session, SessionConfig};
pub use strategy::{FirstMoveSelector, MoveSelector, RandomSelector};
