//! Piece kinds of the variant.

use std::fmt;

/// The kind of a piece, without color information.
///
/// The variant has no pawns and no queens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    King = 3,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 4;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
    ];

    /// Return the index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the layout character for this kind (lowercase).
    #[inline]
    pub const fn layout_char(self) -> char {
        match self {
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::King => 'k',
        }
    }

    /// Parse a layout character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return the English name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn layout_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.layout_char();
            assert_eq!(PieceKind::from_layout_char(c), Some(kind));
            assert_eq!(PieceKind::from_layout_char(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn no_pawns_or_queens() {
        assert_eq!(PieceKind::from_layout_char('p'), None);
        assert_eq!(PieceKind::from_layout_char('Q'), None);
        assert_eq!(PieceKind::from_layout_char('1'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Knight), "knight");
        assert_eq!(format!("{}", PieceKind::King), "king");
    }
}
