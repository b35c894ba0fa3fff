//! Knight geometry.

use crate::chess_move::Move;
use crate::error::Rejection;
use crate::piece_kind::PieceKind;

/// A knight jumps in an L; intervening squares are irrelevant.
pub(super) fn check_knight(mv: Move) -> Result<(), Rejection> {
    match mv.abs_delta() {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(Rejection::IllegalGeometry {
            kind: PieceKind::Knight,
        }),
    }
}
