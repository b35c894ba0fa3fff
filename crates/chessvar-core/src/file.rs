//! Board files. Unlike ranks, files map straight onto grid columns.

use std::fmt;

/// A file (column) on the board. `FileA` is column 0, where White's king
/// starts; `FileH` is column 7, Black's corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Return the column index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a column index.
    #[inline]
    pub const fn from_index(col: u8) -> Option<File> {
        match col {
            0 => Some(File::FileA),
            1 => Some(File::FileB),
            2 => Some(File::FileC),
            3 => Some(File::FileD),
            4 => Some(File::FileE),
            5 => Some(File::FileF),
            6 => Some(File::FileG),
            7 => Some(File::FileH),
            _ => None,
        }
    }

    /// Parse a coordinate letter. Only lowercase `a`..`h` is accepted, so
    /// `"A1"` is a malformed square rather than a1.
    #[inline]
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Return the coordinate letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn letters_round_trip_through_columns() {
        for col in 0..8u8 {
            let file = File::from_index(col).unwrap();
            assert_eq!(file.index(), usize::from(col));
            assert_eq!(File::from_char(file.to_char()), Some(file));
        }
        assert_eq!(File::from_index(8), None);
    }

    #[test]
    fn rejects_out_of_range_letters() {
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
        assert_eq!(File::from_char('1'), None);
        assert_eq!(File::from_char('`'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", File::FileA), "a");
        assert_eq!(format!("{}", File::FileH), "h");
    }
}
