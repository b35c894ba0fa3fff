//! A proposed move: source and destination squares, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

const SQ_MASK: u16 = 0x003F;
const DST_SHIFT: u32 = 6;

/// A move from one square to another.
///
/// ```text
/// bits 0-5:  source square      (0-63)
/// bits 6-11: destination square (0-63)
/// ```
///
/// The variant has no promotions, castling or en passant, so a move is
/// nothing more than its two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a move.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Return the source square.
    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_masked(self.0 & SQ_MASK)
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_masked((self.0 >> DST_SHIFT) & SQ_MASK)
    }

    /// Return `(|row delta|, |column delta|)`.
    #[inline]
    pub const fn abs_delta(self) -> (u8, u8) {
        let (d_row, d_col) = self.source().delta(self.dest());
        (d_row.unsigned_abs(), d_col.unsigned_abs())
    }

    /// Return `true` if source and destination coincide.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.source().index() == self.dest().index()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
