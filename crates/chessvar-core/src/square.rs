//! Board squares addressed by grid row and column.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board, stored as `row * 8 + col`.
///
/// Rows run top-down from the far rank, so A8 = 0, H8 = 7, A1 = 56, H1 = 63.
/// See [`Rank::row`] for the rank/row mapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.row() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a grid row and column, returning `None` if either is off the board.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from the low 6 bits of a packed value.
    #[inline]
    pub(crate) const fn from_index_masked(bits: u16) -> Square {
        Square((bits & 0x3F) as u8)
    }

    /// Parse a coordinate such as `"e4"` into a square.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareError> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::WrongLength {
                found: s.to_string(),
            });
        };

        let file = File::from_char(file_char).ok_or(SquareError::InvalidFile {
            character: file_char,
        })?;
        let rank = Rank::from_char(rank_char).ok_or(SquareError::InvalidRank {
            character: rank_char,
        })?;
        Ok(Square::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the grid row (0 = far rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the grid column (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_row(self.row()) {
            Some(rank) => rank,
            None => Rank::Rank1,
        }
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.col()) {
            Some(file) => file,
            None => File::FileH,
        }
    }

    /// Return `true` if this square lies on [`Rank::FAR`].
    #[inline]
    pub const fn is_far_rank(self) -> bool {
        self.row() as usize == Rank::FAR.row()
    }

    /// Return the square `d_row` rows and `d_col` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Return `(row delta, column delta)` from `self` to `other`.
    #[inline]
    pub const fn delta(self, other: Square) -> (i8, i8) {
        (
            other.row() as i8 - self.row() as i8,
            other.col() as i8 - self.col() as i8,
        )
    }

    /// Chebyshev distance: the number of king steps between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        let (d_row, d_col) = self.delta(other);
        let (d_row, d_col) = (d_row.unsigned_abs(), d_col.unsigned_abs());
        if d_row > d_col { d_row } else { d_col }
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants, far rank first
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::SquareError;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn rank_one_is_the_bottom_row() {
        let sq = Square::new(Rank::Rank1, File::FileA);
        assert_eq!(sq, Square::A1);
        assert_eq!(sq.row(), 7);
        assert_eq!(sq.col(), 0);
        assert_eq!(sq.index(), 56);
    }

    #[test]
    fn rank_eight_is_the_far_row() {
        assert_eq!(Square::A8.row(), 0);
        assert_eq!(Square::H8.index(), 7);
        assert!(Square::E8.is_far_rank());
        assert!(!Square::E7.is_far_rank());
        for sq in Square::all() {
            assert_eq!(sq.is_far_rank(), sq.rank() == Rank::FAR, "{sq}");
        }
    }

    #[test]
    fn rank_file_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.rank(), sq.file()), sq);
            assert_eq!(Square::from_coords(sq.row(), sq.col()), Some(sq));
        }
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Ok(Square::A1));
        assert_eq!(Square::from_algebraic("h1"), Ok(Square::H1));
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::A1), "a1");
    }

    #[test]
    fn algebraic_invalid() {
        assert_eq!(
            Square::from_algebraic("i1"),
            Err(SquareError::InvalidFile { character: 'i' })
        );
        assert_eq!(
            Square::from_algebraic("a9"),
            Err(SquareError::InvalidRank { character: '9' })
        );
        assert!(matches!(
            Square::from_algebraic(""),
            Err(SquareError::WrongLength { .. })
        ));
        assert!(matches!(
            Square::from_algebraic("a1b"),
            Err(SquareError::WrongLength { .. })
        ));
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::A1.offset(-1, 0), Some(Square::A2));
        assert_eq!(Square::A1.offset(0, 1), Some(Square::B1));
        assert_eq!(Square::A1.offset(1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::D4.offset(-2, 1), Some(Square::E6));
    }

    #[test]
    fn delta_and_distance() {
        assert_eq!(Square::A1.delta(Square::A2), (-1, 0));
        assert_eq!(Square::C1.delta(Square::D3), (-2, 1));
        assert_eq!(Square::A1.distance(Square::B2), 1);
        assert_eq!(Square::A1.distance(Square::H8), 7);
        assert_eq!(Square::D4.distance(Square::D4), 0);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
