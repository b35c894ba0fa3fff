//! Line-protocol front end for chessvar.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, PlayOption, parse_command};
pub use error::PlayError;
pub use session::{PlayConfig, Session};
