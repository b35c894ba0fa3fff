//! Rule engine for a king-race chess variant: kings, rooks, bishops and
//! knights on an 8x8 board, won by marching the king to the far rank.

mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
mod file;
mod game;
mod layout;
mod piece;
mod piece_kind;
mod race;
mod rank;
mod square;
mod validate;

pub use attacks::{exposing_attacker, is_exposed};
pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, LayoutError, Rejection, SquareError};
pub use file::File;
pub use game::{Game, MoveOutcome};
pub use layout::{STARTING_LAYOUT, parse_layout};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use race::{GameState, Race};
pub use rank::Rank;
pub use square::Square;
