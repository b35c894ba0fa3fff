//! Rook and bishop geometry and path clearance.

use crate::attacks::between;
use crate::board::Board;
use crate::chess_move::Move;
use crate::error::Rejection;
use crate::piece_kind::PieceKind;

/// A rook moves any distance along its row or column.
pub(super) fn check_rook(board: &Board, mv: Move) -> Result<(), Rejection> {
    let (d_row, d_col) = mv.abs_delta();
    if mv.is_null() || (d_row != 0 && d_col != 0) {
        return Err(Rejection::IllegalGeometry {
            kind: PieceKind::Rook,
        });
    }
    check_path(board, mv)
}

/// A bishop moves any distance along a diagonal.
pub(super) fn check_bishop(board: &Board, mv: Move) -> Result<(), Rejection> {
    let (d_row, d_col) = mv.abs_delta();
    if d_row == 0 || d_row != d_col {
        return Err(Rejection::IllegalGeometry {
            kind: PieceKind::Bishop,
        });
    }
    check_path(board, mv)
}

/// Sliders cannot jump: every square strictly between must be empty.
fn check_path(board: &Board, mv: Move) -> Result<(), Rejection> {
    match between(mv.source(), mv.dest()).find(|&sq| board.is_occupied(sq)) {
        Some(square) => Err(Rejection::PathBlocked { square }),
        None => Ok(()),
    }
}
