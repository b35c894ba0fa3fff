//! Command parsing for the line protocol.

use chessvar_core::{Game, Square};

use crate::error::PlayError;

/// A session setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOption {
    /// `set showboard on|off` -- print the board after each accepted move.
    ShowBoard(bool),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `position <layout> [w|b]` -- load a position.
    Position(Box<Game>),
    /// `move <from> <to>` or `move <from><to>` -- attempt a move.
    Move {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `board` -- print the board.
    Board,
    /// `layout` -- print the position as a layout string.
    Layout,
    /// `state` -- print the game state.
    State,
    /// `turn` -- print the side to move.
    Turn,
    /// `captured` -- print captured pieces in order.
    Captured,
    /// `set <option> <value>` -- change a session setting.
    Set(PlayOption),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "layout" => Ok(Command::Layout),
        "state" => Ok(Command::State),
        "turn" => Ok(Command::Turn),
        "captured" => Ok(Command::Captured),
        "quit" => Ok(Command::Quit),
        "move" => parse_move(rest),
        "position" => parse_position(rest),
        "set" => parse_set(rest),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse `move` arguments: either two squares or one four-character token.
fn parse_move(tokens: &[&str]) -> Result<Command, PlayError> {
    let (from, to) = match tokens {
        [from, to] => (*from, *to),
        [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
        _ => return Err(PlayError::MalformedMove),
    };

    Ok(Command::Move {
        from: from.parse()?,
        to: to.parse()?,
    })
}

/// Parse `position` arguments into a fresh game.
fn parse_position(tokens: &[&str]) -> Result<Command, PlayError> {
    if tokens.is_empty() {
        return Err(PlayError::MissingLayout);
    }

    let layout = tokens.join(" ");
    let game = Game::from_layout(&layout).map_err(|source| PlayError::InvalidLayout {
        layout: layout.clone(),
        source,
    })?;
    Ok(Command::Position(Box::new(game)))
}

/// Parse `set <name> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let [name, value] = tokens else {
        return Err(PlayError::UnknownOption {
            name: tokens.join(" "),
        });
    };

    match name.to_ascii_lowercase().as_str() {
        "showboard" => {
            let on = match *value {
                "on" | "true" => true,
                "off" | "false" => false,
                _ => {
                    return Err(PlayError::InvalidOptionValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
            };
            Ok(Command::Set(PlayOption::ShowBoard(on)))
        }
        _ => Err(PlayError::UnknownOption {
            name: name.to_string(),
        }),
    }
}
