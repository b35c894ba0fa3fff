//! Layout strings: FEN-style piece placement with an optional side to move.
//!
//! ```text
//! 8/8/8/8/8/8/RBN2nbr/KBN2nbk w
//! ```
//!
//! Ranks run from 8 down to 1, digits are runs of empty cells, `K R B N`
//! are White and `k r b n` are Black.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::Square;

/// Layout string for the starting position.
pub const STARTING_LAYOUT: &str = "8/8/8/8/8/8/RBN2nbr/KBN2nbk w";

impl FromStr for Board {
    type Err = LayoutError;

    /// Parse the piece placement field only. The board is validated.
    fn from_str(placement: &str) -> Result<Board, LayoutError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        // String order is rank 8 first, which is also grid row order.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    col += digit as u8;
                } else {
                    let piece = Piece::from_layout_char(c)
                        .ok_or(LayoutError::InvalidPieceChar { character: c })?;
                    let sq = Square::from_coords(row as u8, col).ok_or(
                        LayoutError::BadRankLength {
                            rank_index: row,
                            length: col as usize + 1,
                        },
                    )?;
                    board.set(sq, Some(piece));
                    col += 1;
                }

                if col > 8 {
                    return Err(LayoutError::BadRankLength {
                        rank_index: row,
                        length: col as usize,
                    });
                }
            }

            if col != 8 {
                return Err(LayoutError::BadRankLength {
                    rank_index: row,
                    length: col as usize,
                });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

/// Parse a full layout string: placement plus optional side to move (default White).
pub fn parse_layout(layout: &str) -> Result<(Board, Color), LayoutError> {
    let fields: Vec<&str> = layout.split_whitespace().collect();
    let (placement, side) = match fields.as_slice() {
        [placement] => (*placement, Color::White),
        [placement, side] => {
            let side = Color::from_layout_field(side).ok_or_else(|| LayoutError::InvalidColor {
                found: side.to_string(),
            })?;
            (*placement, side)
        }
        _ => {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }
    };

    Ok((placement.parse()?, side))
}

impl fmt::Display for Board {
    /// Write the piece placement field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match Square::from_coords(row, col).and_then(|sq| self.piece_on(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.layout_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{STARTING_LAYOUT, parse_layout};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, LayoutError};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_layout_matches_starting_position() {
        let (board, side) = parse_layout(STARTING_LAYOUT).unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(side, Color::White);
    }

    #[test]
    fn display_roundtrip() {
        let board = Board::starting_position();
        assert_eq!(format!("{board}"), "8/8/8/8/8/8/RBN2nbr/KBN2nbk");
        let reparsed: Board = format!("{board}").parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn placement_uses_inverted_rows() {
        let board: Board = "7k/8/8/8/8/8/8/K6n".parse().unwrap();
        assert_eq!(board.piece_on(Square::H8), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_on(Square::A1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(Square::H1), Some(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn side_field() {
        let (_, side) = parse_layout("7k/8/8/8/8/8/8/K7 b").unwrap();
        assert_eq!(side, Color::Black);
        let (_, side) = parse_layout("7k/8/8/8/8/8/8/K7").unwrap();
        assert_eq!(side, Color::White);
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            parse_layout("8/8/8/K6k"),
            Err(LayoutError::WrongRankCount { found: 4 })
        );
    }

    #[test]
    fn bad_rank_length() {
        assert!(matches!(
            parse_layout("7k/8/8/8/8/8/8/K8"),
            Err(LayoutError::BadRankLength { rank_index: 7, .. })
        ));
        assert!(matches!(
            parse_layout("7k/8/8/8/8/8/8/K6"),
            Err(LayoutError::BadRankLength { rank_index: 7, length: 7 })
        ));
    }

    #[test]
    fn rejects_pawns_and_queens() {
        assert_eq!(
            parse_layout("7k/8/8/8/8/8/P7/K7"),
            Err(LayoutError::InvalidPieceChar { character: 'P' })
        );
        assert_eq!(
            parse_layout("7k/8/8/8/8/8/q7/K7"),
            Err(LayoutError::InvalidPieceChar { character: 'q' })
        );
    }

    #[test]
    fn rejects_bad_side() {
        assert_eq!(
            parse_layout("7k/8/8/8/8/8/8/K7 x"),
            Err(LayoutError::InvalidColor {
                found: "x".to_string()
            })
        );
        assert_eq!(
            parse_layout("7k/8/8/8/8/8/8/K7 w extra"),
            Err(LayoutError::WrongFieldCount { found: 3 })
        );
    }

    #[test]
    fn rejects_invalid_boards() {
        assert_eq!(
            parse_layout("8/8/8/8/8/8/8/K7"),
            Err(LayoutError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            })
        );
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/Kk6"),
            Err(LayoutError::InvalidBoard {
                source: BoardError::KingsAdjacent { .. }
            })
        ));
    }
}
