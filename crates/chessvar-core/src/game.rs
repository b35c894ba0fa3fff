//! A single game: board, side to move, king tracking, captures and the race state.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, LayoutError, Rejection, SquareError};
use crate::layout::parse_layout;
use crate::piece::Piece;
use crate::race::{GameState, Race};
use crate::square::Square;
use crate::validate::validate;

/// Where each king stands and whether it has reached the far rank.
///
/// Updated in the same step as the board, so `squares[c]` always holds the
/// king of color `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct KingTracker {
    /// King squares, indexed by [`Color::index()`].
    squares: [Square; Color::COUNT],
    /// Far-rank arrival flags, indexed by [`Color::index()`].
    far_rank: [bool; Color::COUNT],
}

impl KingTracker {
    fn new(white: Square, black: Square) -> KingTracker {
        KingTracker {
            squares: [white, black],
            far_rank: [false; Color::COUNT],
        }
    }

    /// Return the square of `color`'s king.
    #[inline]
    pub fn square(&self, color: Color) -> Square {
        self.squares[color.index()]
    }

    /// Return `true` if `color`'s king has reached the far rank during play.
    #[inline]
    pub fn reached_far_rank(&self, color: Color) -> bool {
        self.far_rank[color.index()]
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub moved: Piece,
    /// The piece captured on the destination square, if any.
    pub captured: Option<Piece>,
    /// Game state after the move.
    pub state: GameState,
}

/// The rule engine for one game.
///
/// All mutation goes through [`Game::try_move`] (or its string-based wrapper
/// [`Game::attempt_move`]). A rejected move leaves every field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    kings: KingTracker,
    race: Race,
    captured: Vec<Piece>,
}

impl Game {
    /// Start a new game from the variant's starting position, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            side_to_move: Color::White,
            kings: KingTracker::new(Square::A1, Square::H1),
            race: Race::Racing,
            captured: Vec::new(),
        }
    }

    /// Start a game from a layout string such as `"7k/8/8/8/8/8/8/K7 b"`.
    ///
    /// Far-rank flags start cleared and the race starts at [`Race::Racing`],
    /// even if a king already stands on the far rank.
    pub fn from_layout(layout: &str) -> Result<Game, LayoutError> {
        let (board, side_to_move) = parse_layout(layout)?;
        let white = king_of(&board, Color::White)?;
        let black = king_of(&board, Color::Black)?;
        Ok(Game {
            board,
            side_to_move,
            kings: KingTracker::new(white, black),
            race: Race::Racing,
            captured: Vec::new(),
        })
    }

    /// Try a move given as two coordinates such as `"a1"`, `"a2"`.
    ///
    /// Returns `Ok(true)` if the move was legal and applied, `Ok(false)` if it
    /// was rejected (state unchanged), and `Err` if a coordinate is malformed.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<bool, SquareError> {
        let src: Square = from.parse()?;
        let dst: Square = to.parse()?;
        Ok(self.try_move(src, dst).is_ok())
    }

    /// Validate and apply a move, reporting why it was refused if it was.
    pub fn try_move(&mut self, src: Square, dst: Square) -> Result<MoveOutcome, Rejection> {
        let mv = Move::new(src, dst);
        let us = self.side_to_move;

        let candidate = validate(
            &self.board,
            self.kings.squares,
            us,
            self.race.is_finished(),
            mv,
        )
        .inspect_err(|reason| {
            debug!(%mv, side = %us, reason = reason.code(), "move rejected");
        })?;

        self.board = candidate.board;
        self.kings.squares = candidate.kings;
        if let Some(piece) = candidate.captured {
            self.captured.push(piece);
        }

        let before = self.race;
        self.race = if candidate.moved.is_king() {
            let reached = dst.is_far_rank();
            if reached {
                self.kings.far_rank[us.index()] = true;
            }
            self.race.after_king_move(us, reached)
        } else {
            self.race.after_piece_move()
        };

        if !self.race.is_finished() {
            self.side_to_move = us.flip();
        }

        debug!(%mv, side = %us, captured = ?candidate.captured, "move applied");
        match self.race {
            Race::WhiteArmed if before != Race::WhiteArmed => {
                info!(king = %dst, "white king reached the far rank; black has one reply");
            }
            Race::Finished(state) => info!(%state, "game over"),
            _ => {}
        }

        Ok(MoveOutcome {
            moved: candidate.moved,
            captured: candidate.captured,
            state: self.race.state(),
        })
    }

    /// Return the current game state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.race.state()
    }

    /// Return the race state machine.
    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    /// Return the side whose turn it is.
    ///
    /// After the game ends this stays on the side that made the final move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return captured pieces in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Return the square of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings.square(color)
    }

    /// Return `true` if `color`'s king has reached the far rank during play.
    #[inline]
    pub fn reached_far_rank(&self, color: Color) -> bool {
        self.kings.reached_far_rank(color)
    }

    /// Return the layout string for the current position and side to move.
    pub fn layout(&self) -> String {
        format!("{} {}", self.board, self.side_to_move.layout_char())
    }
}

fn king_of(board: &Board, color: Color) -> Result<Square, BoardError> {
    board
        .find_king(color)
        .ok_or(BoardError::InvalidKingCount { color, count: 0 })
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::color::Color;
    use crate::error::{Rejection, SquareError};
    use crate::layout::STARTING_LAYOUT;
    use crate::piece::Piece;
    use crate::race::{GameState, Race};
    use crate::square::Square;

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.king_square(Color::White), Square::A1);
        assert_eq!(game.king_square(Color::Black), Square::H1);
        assert!(game.captured().is_empty());
        assert_eq!(game.layout(), STARTING_LAYOUT);
    }

    #[test]
    fn from_layout_finds_kings() {
        let game = Game::from_layout("8/K6k/8/8/8/8/8/8 b").unwrap();
        assert_eq!(game.king_square(Color::White), Square::A7);
        assert_eq!(game.king_square(Color::Black), Square::H7);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut game = Game::new();
        assert_eq!(game.attempt_move("a2", "a5"), Ok(true));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.board().piece_on(Square::A5), Some(Piece::WHITE_ROOK));
    }

    #[test]
    fn malformed_square_is_an_error() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move("z1", "a2"),
            Err(SquareError::InvalidFile { character: 'z' })
        );
        assert_eq!(
            game.attempt_move("a1", "a0"),
            Err(SquareError::InvalidRank { character: '0' })
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn king_move_updates_tracker() {
        let mut game = Game::from_layout("7k/8/8/8/8/8/8/K7").unwrap();
        game.try_move(Square::A1, Square::B2).unwrap();
        assert_eq!(game.king_square(Color::White), Square::B2);
        assert_eq!(game.board().piece_on(Square::B2), Some(Piece::WHITE_KING));
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = Game::from_layout("7k/8/8/8/R3n3/8/8/K7").unwrap();
        let outcome = game.try_move(Square::A4, Square::E4).unwrap();
        assert_eq!(outcome.captured, Some(Piece::BLACK_KNIGHT));
        assert_eq!(outcome.moved, Piece::WHITE_ROOK);
        assert_eq!(game.captured(), &[Piece::BLACK_KNIGHT]);
    }

    #[test]
    fn white_arrival_arms_without_ending() {
        let mut game = Game::from_layout("8/K6k/8/8/8/8/8/8").unwrap();
        let outcome = game.try_move(Square::A7, Square::A8).unwrap();
        assert_eq!(outcome.state, GameState::InProgress);
        assert_eq!(game.race(), Race::WhiteArmed);
        assert!(game.reached_far_rank(Color::White));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn finished_game_rejects_everything() {
        let mut game = Game::from_layout("8/K6k/8/8/8/8/8/8 b").unwrap();
        game.try_move(Square::H7, Square::H8).unwrap();
        assert_eq!(game.state(), GameState::BlackWon);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.try_move(Square::H8, Square::G8), Err(Rejection::GameOver));
        assert_eq!(
            game.try_move(Square::A7, Square::A8),
            Err(Rejection::NotYourPiece)
        );
    }
}
