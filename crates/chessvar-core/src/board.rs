//! The 8x8 grid of pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement on the 8x8 grid.
///
/// `Board` is `Copy`: hypothetical positions are built with
/// [`Board::with_move`] and simply dropped when not needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cell contents, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the variant's starting position.
    ///
    /// ```text
    /// 2  R B N . . n b r
    /// 1  K B N . . n b k
    ///    a b c d e f g h
    /// ```
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        let placement = [
            (Square::A2, Piece::WHITE_ROOK),
            (Square::B2, Piece::WHITE_BISHOP),
            (Square::C2, Piece::WHITE_KNIGHT),
            (Square::A1, Piece::WHITE_KING),
            (Square::B1, Piece::WHITE_BISHOP),
            (Square::C1, Piece::WHITE_KNIGHT),
            (Square::F2, Piece::BLACK_KNIGHT),
            (Square::G2, Piece::BLACK_BISHOP),
            (Square::H2, Piece::BLACK_ROOK),
            (Square::F1, Piece::BLACK_KNIGHT),
            (Square::G1, Piece::BLACK_BISHOP),
            (Square::H1, Piece::BLACK_KING),
        ];
        for (sq, piece) in placement {
            board.set(sq, Some(piece));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Iterate over occupied squares and their pieces, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Find the king of the given color by scanning the grid.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find_map(|(sq, piece)| (piece == king).then_some(sq))
    }

    /// Overwrite a single cell.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Return the board after relocating the piece on `src` to `dst`.
    ///
    /// Copy-make: `self` is not modified. Whatever stood on `dst` is
    /// overwritten; geometry and legality are the caller's business.
    #[must_use]
    pub fn with_move(&self, src: Square, dst: Square) -> Board {
        let mut b = *self;
        let moving = b.cells[src.index()].take();
        b.set(dst, moving);
        b
    }

    /// Validate the structural integrity of the board.
    ///
    /// Each side must have exactly one king and the kings must not touch.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut kings = [None; Color::COUNT];
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
            kings[color.index()] = self.find_king(color);
        }

        if let [Some(white), Some(black)] = kings
            && white.distance(black) <= 1
        {
            return Err(BoardError::KingsAdjacent { white, black });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, far rank on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::from_coords(row, col)
                    .and_then(|sq| board.piece_on(sq))
                    .map_or('.', Piece::layout_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
