//! Error types for coordinate parsing, layout parsing, board validation and move rejection.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A malformed square coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The coordinate is not exactly two characters long.
    #[error("expected a two-character square, found \"{found}\"")]
    WrongLength {
        /// The string that was supplied.
        found: String,
    },
    /// The first character is not a file letter `a`..`h`.
    #[error("invalid file character: '{character}'")]
    InvalidFile {
        /// The invalid character.
        character: char,
    },
    /// The second character is not a rank digit `1`..`8`.
    #[error("invalid rank character: '{character}'")]
    InvalidRank {
        /// The invalid character.
        character: char,
    },
}

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// More than two whitespace-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 cells.
    BadRankLength {
        /// Zero-based rank index in the string (0 = rank 8).
        rank_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongFieldCount { found } => {
                write!(f, "expected at most 2 layout fields, found {found}")
            }
            LayoutError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            LayoutError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} cells, expected 8")
            }
            LayoutError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            LayoutError::InvalidColor { found } => {
                write!(f, "invalid side to move: \"{found}\"")
            }
            LayoutError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for LayoutError {
    fn from(source: BoardError) -> Self {
        LayoutError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// The two kings stand on neighbouring squares.
    #[error("kings on {white} and {black} are adjacent")]
    KingsAdjacent {
        /// White king square.
        white: Square,
        /// Black king square.
        black: Square,
    },
}

/// Why a proposed move was refused.
///
/// Every variant is an ordinary outcome, never a fault: the game is left
/// exactly as it was before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The source square is empty or holds an opponent's piece.
    #[error("no piece of the side to move on the source square")]
    NotYourPiece,
    /// The game has already finished.
    #[error("the game is already over")]
    GameOver,
    /// The destination holds a piece of the mover's color.
    #[error("destination holds a piece of the same color")]
    OwnPieceAtDestination,
    /// The destination holds the opposing king.
    #[error("kings cannot be captured")]
    KingCapture,
    /// The piece does not move along that line or shape.
    #[error("a {kind} cannot move that way")]
    IllegalGeometry {
        /// Kind of the piece that was moved.
        kind: PieceKind,
    },
    /// A sliding move passes over an occupied square.
    #[error("path blocked at {square}")]
    PathBlocked {
        /// First occupied square on the path.
        square: Square,
    },
    /// A king move ends next to the other king.
    #[error("kings would stand next to each other")]
    KingsAdjacent,
    /// After the move a king could be captured by a rook, bishop or knight.
    #[error("king on {king} would be exposed to {attacker}")]
    KingExposed {
        /// Square of the exposed king.
        king: Square,
        /// Square of the first attacker found.
        attacker: Square,
    },
}

impl Rejection {
    /// Short machine-readable reason code.
    pub const fn code(self) -> &'static str {
        match self {
            Rejection::NotYourPiece => "not_your_piece",
            Rejection::GameOver => "game_over",
            Rejection::OwnPieceAtDestination => "own_piece_at_destination",
            Rejection::KingCapture => "king_capture",
            Rejection::IllegalGeometry { .. } => "illegal_geometry",
            Rejection::PathBlocked { .. } => "path_blocked",
            Rejection::KingsAdjacent => "kings_adjacent",
            Rejection::KingExposed { .. } => "king_exposed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, LayoutError, Rejection, SquareError};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn square_error_display() {
        let err = SquareError::InvalidFile { character: 'z' };
        assert_eq!(format!("{err}"), "invalid file character: 'z'");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for black, found 0");
    }

    #[test]
    fn layout_error_from_board_error() {
        let board_err = BoardError::KingsAdjacent {
            white: Square::D4,
            black: Square::E5,
        };
        let layout_err: LayoutError = board_err.into();
        assert!(matches!(layout_err, LayoutError::InvalidBoard { .. }));
        assert_eq!(
            format!("{layout_err}"),
            "invalid board: kings on d4 and e5 are adjacent"
        );
    }

    #[test]
    fn rejection_display_and_code() {
        let err = Rejection::IllegalGeometry {
            kind: PieceKind::Bishop,
        };
        assert_eq!(format!("{err}"), "a bishop cannot move that way");
        assert_eq!(err.code(), "illegal_geometry");

        let err = Rejection::KingExposed {
            king: Square::A1,
            attacker: Square::A8,
        };
        assert_eq!(format!("{err}"), "king on a1 would be exposed to a8");
    }
}
