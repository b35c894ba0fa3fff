//! Colored piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-1: [`PieceKind`] (values 0-3)
/// - bit 2: [`Color`] (0 = White, 1 = Black)
///
/// Every byte produced by [`Piece::new`] is a valid piece; there is no way
/// to build an unknown tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 8;

    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All pieces: White (indices 0-3) followed by Black (indices 4-7).
    pub const ALL: [Piece; 8] = [
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_KING,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 2 | (kind as u8))
    }

    /// Parse a layout character into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_layout_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x03 {
            0 => PieceKind::Knight,
            1 => PieceKind::Bishop,
            2 => PieceKind::Rook,
            _ => PieceKind::King,
        }
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 2 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return a contiguous index 0-7.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return `true` if this is a king of either color.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// Return the layout character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn layout_char(self) -> char {
        let base = self.kind().layout_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().layout_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
