//! King geometry and the no-touching rule.

use crate::chess_move::Move;
use crate::error::Rejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A king steps one square in any direction and may not land next to the other king.
///
/// `other_king` is the opposing king's current square; it does not move.
pub(super) fn check_king(mv: Move, other_king: Square) -> Result<(), Rejection> {
    let (d_row, d_col) = mv.abs_delta();
    if mv.is_null() || d_row > 1 || d_col > 1 {
        return Err(Rejection::IllegalGeometry {
            kind: PieceKind::King,
        });
    }

    if mv.dest().distance(other_king) <= 1 {
        return Err(Rejection::KingsAdjacent);
    }

    Ok(())
}
