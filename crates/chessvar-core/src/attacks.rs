//! Line scanning and king-exposure detection.
//!
//! Exposure is probed on a hypothetical board: callers build it with
//! [`Board::with_move`] and hand it in, so the live board is never touched.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Rook directions as `(row step, column step)`.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions as `(row step, column step)`.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight knight jumps as `(row delta, column delta)`.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Return the first occupied square (and its piece) walking from `from` in `dir`.
///
/// `from` itself is not inspected.
pub(crate) fn first_piece(board: &Board, from: Square, dir: (i8, i8)) -> Option<(Square, Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(dir.0, dir.1) {
        if let Some(piece) = board.piece_on(next) {
            return Some((next, piece));
        }
        sq = next;
    }
    None
}

/// Squares strictly between `src` and `dst`.
///
/// Only meaningful when the two squares share a row, column or diagonal;
/// for any other pair the result is empty.
pub(crate) fn between(src: Square, dst: Square) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = src.delta(dst);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let steps = if aligned { d_row.abs().max(d_col.abs()) } else { 0 };
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    (1..steps).filter_map(move |i| src.offset(step_row * i, step_col * i))
}

/// First piece of `attacker` seen along any of `dirs` from `target`.
fn slider_attack(board: &Board, target: Square, dirs: &[(i8, i8)], attacker: Piece) -> Option<Square> {
    dirs.iter().find_map(|&dir| match first_piece(board, target, dir) {
        Some((sq, piece)) if piece == attacker => Some(sq),
        _ => None,
    })
}

/// Return the square of a rook, bishop or knight attacking the king on `king_sq`.
///
/// The attacking side is the opponent of whichever king stands on `king_sq`.
/// Returns `None` if the square holds no king or nothing attacks it. The
/// opposing king never counts as an attacker.
pub fn exposing_attacker(board: &Board, king_sq: Square) -> Option<Square> {
    let king = board.piece_on(king_sq).filter(|piece| piece.is_king())?;
    let them = king.color().flip();

    let knight = Piece::new(PieceKind::Knight, them);
    let by_knight = KNIGHT_OFFSETS.iter().find_map(|&(d_row, d_col)| {
        king_sq
            .offset(d_row, d_col)
            .filter(|&sq| board.piece_on(sq) == Some(knight))
    });

    by_knight
        .or_else(|| slider_attack(board, king_sq, &DIAGONAL, Piece::new(PieceKind::Bishop, them)))
        .or_else(|| slider_attack(board, king_sq, &ORTHOGONAL, Piece::new(PieceKind::Rook, them)))
}

/// Return `true` if the king on `king_sq` is attacked by a rook, bishop or knight.
#[inline]
pub fn is_exposed(board: &Board, king_sq: Square) -> bool {
    exposing_attacker(board, king_sq).is_some()
}
