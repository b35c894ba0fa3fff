//! Board ranks (1–8) and their mapping onto grid rows.

use std::fmt;

/// A rank on the board, from Rank1 (both sides' home rank) to Rank8.
///
/// Ranks are numbered bottom-up while grid rows are numbered top-down:
///
/// ```text
/// rank 8 -> row 0   (far rank)
/// rank 7 -> row 1
/// ...
/// rank 1 -> row 7   (home rank)
/// ```
///
/// [`Rank::row`] and [`Rank::from_row`] are the only places this inversion
/// is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// The rank both kings race toward.
    pub const FAR: Rank = Rank::Rank8;

    /// Return the index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Return the grid row holding this rank (Rank1 = row 7, Rank8 = row 0).
    #[inline]
    pub const fn row(self) -> usize {
        7 - self.index()
    }

    /// Create a rank from a grid row (row 0 = Rank8, row 7 = Rank1).
    #[inline]
    pub const fn from_row(row: u8) -> Option<Rank> {
        if row < 8 {
            Rank::from_index(7 - row)
        } else {
            None
        }
    }

    /// Parse a rank digit `1`..`8`.
    #[inline]
    pub fn from_char(c: char) -> Option<Rank> {
        if c.is_ascii_digit() {
            Rank::from_index((c as u8).wrapping_sub(b'1'))
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}
