//! Line-oriented play session over any reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use chessvar_core::{Game, Square};

use crate::command::{Command, PlayOption, parse_command};
use crate::error::PlayError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayConfig {
    /// Print the board after every accepted move. Off by default.
    pub show_board: bool,
}

/// A play session: one game plus the session settings.
///
/// Reads one command per line and writes one response per command. Only
/// I/O failures end the session early; malformed commands are answered with
/// `error <message>` and the session carries on.
pub struct Session {
    game: Game,
    config: PlayConfig,
}

impl Session {
    /// Create a session with the starting position and default settings.
    pub fn new() -> Self {
        Self::with_config(PlayConfig::default())
    }

    /// Create a session with the starting position and the given settings.
    pub fn with_config(config: PlayConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current settings.
    pub fn config(&self) -> PlayConfig {
        self.config
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), PlayError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session ending");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), PlayError> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                writeln!(out, "ok")?;
            }
            Command::Position(game) => {
                self.game = *game;
                writeln!(out, "ok")?;
            }
            Command::Move { from, to } => self.handle_move(from, to, out)?,
            Command::Board => writeln!(out, "{}", self.game.board().pretty())?,
            Command::Layout => writeln!(out, "{}", self.game.layout())?,
            Command::State => writeln!(out, "{}", self.game.state())?,
            Command::Turn => writeln!(out, "{}", self.game.side_to_move())?,
            Command::Captured => self.handle_captured(out)?,
            Command::Set(PlayOption::ShowBoard(on)) => {
                self.config.show_board = on;
                writeln!(out, "ok")?;
            }
            Command::Quit => {}
            Command::Unknown(name) => debug!(%name, "ignoring unknown command"),
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, from: Square, to: Square, out: &mut W) -> Result<(), PlayError> {
        match self.game.try_move(from, to) {
            Ok(outcome) => {
                if outcome.state.is_terminal() {
                    writeln!(out, "ok {}", outcome.state)?;
                } else {
                    writeln!(out, "ok")?;
                }
                if self.config.show_board {
                    writeln!(out, "{}", self.game.board().pretty())?;
                }
            }
            Err(reason) => writeln!(out, "rejected {}", reason.code())?,
        }
        Ok(())
    }

    fn handle_captured<W: Write>(&self, out: &mut W) -> Result<(), PlayError> {
        let captured = self.game.captured();
        if captured.is_empty() {
            writeln!(out, "-")?;
        } else {
            let letters: Vec<String> = captured.iter().map(|p| p.to_string()).collect();
            writeln!(out, "{}", letters.join(" "))?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
