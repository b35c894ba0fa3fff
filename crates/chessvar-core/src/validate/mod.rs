//! Move validation: the pre-move gate, per-piece geometry, and king safety.
//!
//! Validation never touches the live board. The post-move position is
//! built by copy and returned as a [`Candidate`]; committing it is the
//! caller's job.

mod king;
mod knights;
mod sliders;

use crate::attacks::exposing_attacker;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::Rejection;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::check_king;
use self::knights::check_knight;
use self::sliders::{check_bishop, check_rook};

/// A validated move together with the position it produces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    /// Board after the move.
    pub board: Board,
    /// King squares after the move, indexed by [`Color::index()`].
    pub kings: [Square; Color::COUNT],
    /// The piece that moved.
    pub moved: Piece,
    /// The piece removed from the destination, if any.
    pub captured: Option<Piece>,
}

/// Checks that apply to every move regardless of piece kind.
///
/// Returns the piece being moved.
fn gate(board: &Board, us: Color, finished: bool, mv: Move) -> Result<Piece, Rejection> {
    let moving = board
        .piece_on(mv.source())
        .filter(|piece| piece.color() == us)
        .ok_or(Rejection::NotYourPiece)?;

    if finished {
        return Err(Rejection::GameOver);
    }

    if let Some(target) = board.piece_on(mv.dest()) {
        if target.color() == us {
            return Err(Rejection::OwnPieceAtDestination);
        }
        if target.is_king() {
            return Err(Rejection::KingCapture);
        }
    }

    Ok(moving)
}

/// Validate `mv` for side `us` and build the resulting position.
///
/// `kings` holds the current king squares indexed by [`Color::index()`].
pub(crate) fn validate(
    board: &Board,
    kings: [Square; Color::COUNT],
    us: Color,
    finished: bool,
    mv: Move,
) -> Result<Candidate, Rejection> {
    let them = us.flip();
    let moving = gate(board, us, finished, mv)?;

    match moving.kind() {
        PieceKind::Rook => check_rook(board, mv)?,
        PieceKind::Bishop => check_bishop(board, mv)?,
        PieceKind::Knight => check_knight(mv)?,
        PieceKind::King => check_king(mv, kings[them.index()])?,
    }

    let after = board.with_move(mv.source(), mv.dest());
    let mut kings_after = kings;
    if moving.is_king() {
        kings_after[us.index()] = mv.dest();
    }

    // Any move may open or close a line onto either king.
    for king_sq in [kings_after[them.index()], kings_after[us.index()]] {
        if let Some(attacker) = exposing_attacker(&after, king_sq) {
            return Err(Rejection::KingExposed {
                king: king_sq,
                attacker,
            });
        }
    }

    Ok(Candidate {
        board: after,
        kings: kings_after,
        moved: moving,
        captured: board.piece_on(mv.dest()),
    })
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::error::Rejection;
    use crate::piece::Piece;
    use crate::square::Square;

    const START_KINGS: [Square; 2] = [Square::A1, Square::H1];

    fn check(board: &Board, us: Color, src: Square, dst: Square) -> Result<(), Rejection> {
        let kings = [
            board.find_king(Color::White).unwrap(),
            board.find_king(Color::Black).unwrap(),
        ];
        validate(board, kings, us, false, Move::new(src, dst)).map(|_| ())
    }

    #[test]
    fn empty_source_is_not_your_piece() {
        let board = Board::starting_position();
        assert_eq!(
            check(&board, Color::White, Square::D4, Square::D5),
            Err(Rejection::NotYourPiece)
        );
    }

    #[test]
    fn opponent_piece_is_not_your_piece() {
        let board = Board::starting_position();
        assert_eq!(
            check(&board, Color::White, Square::H2, Square::H5),
            Err(Rejection::NotYourPiece)
        );
    }

    #[test]
    fn finished_game_rejects_after_ownership() {
        let board = Board::starting_position();
        let mv = Move::new(Square::A2, Square::A5);
        assert_eq!(
            validate(&board, START_KINGS, Color::White, true, mv).map(|_| ()),
            Err(Rejection::GameOver)
        );
    }

    #[test]
    fn own_piece_at_destination() {
        let board = Board::starting_position();
        assert_eq!(
            check(&board, Color::White, Square::A1, Square::A2),
            Err(Rejection::OwnPieceAtDestination)
        );
    }

    #[test]
    fn king_is_never_a_capture_target() {
        let board: Board = "7k/8/8/8/8/8/8/K6R".parse().unwrap();
        assert_eq!(
            check(&board, Color::White, Square::H1, Square::H8),
            Err(Rejection::KingCapture)
        );
    }

    #[test]
    fn candidate_records_capture_and_king_squares() {
        let board: Board = "7k/8/8/8/R3n3/8/8/K7".parse().unwrap();
        let kings = [Square::A1, Square::H8];
        let cand = validate(&board, kings, Color::White, false, Move::new(Square::A4, Square::E4))
            .unwrap();
        assert_eq!(cand.captured, Some(Piece::BLACK_KNIGHT));
        assert_eq!(cand.moved, Piece::WHITE_ROOK);
        assert_eq!(cand.kings, kings);
        assert_eq!(cand.board.piece_on(Square::E4), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_on(Square::E4), Some(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn king_move_updates_candidate_king_square() {
        let board: Board = "7k/8/8/8/8/8/8/K7".parse().unwrap();
        let cand = validate(
            &board,
            [Square::A1, Square::H8],
            Color::White,
            false,
            Move::new(Square::A1, Square::B2),
        )
        .unwrap();
        assert_eq!(cand.kings, [Square::B2, Square::H8]);
    }

    #[test]
    fn unblocking_a_line_onto_own_king_is_rejected() {
        // The knight on a4 shields the white king from the rook on a8.
        let board: Board = "r6k/8/8/8/N7/8/8/K7".parse().unwrap();
        assert_eq!(
            check(&board, Color::White, Square::A4, Square::B6),
            Err(Rejection::KingExposed {
                king: Square::A1,
                attacker: Square::A8
            })
        );
    }

    #[test]
    fn attacking_the_opposing_king_is_rejected() {
        let board: Board = "7k/8/8/8/8/8/8/K2R4".parse().unwrap();
        assert_eq!(
            check(&board, Color::White, Square::D1, Square::H1),
            Err(Rejection::KingExposed {
                king: Square::H8,
                attacker: Square::H1
            })
        );
        assert_eq!(check(&board, Color::White, Square::D1, Square::D5), Ok(()));
    }
}
