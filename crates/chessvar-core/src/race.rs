//! The race to the far rank and the game outcomes it produces.

use std::fmt;

use crate::color::Color;

/// Observable game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    WhiteWon,
    BlackWon,
    Tie,
}

impl GameState {
    /// Return `true` for every state except [`GameState::InProgress`].
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Return the snake_case name used by the text front end.
    pub const fn name(self) -> &'static str {
        match self {
            GameState::InProgress => "in_progress",
            GameState::WhiteWon => "white_won",
            GameState::BlackWon => "black_won",
            GameState::Tie => "tie",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress of the race to the far rank.
///
/// ```text
/// Racing ── White king reaches far rank ──▶ WhiteArmed
///   │                                         │
///   │ Black king reaches far rank             │ Black king reaches far rank ─▶ Finished(Tie)
///   ▼                                         │ any other Black move ─────────▶ Finished(WhiteWon)
/// Finished(BlackWon)
/// ```
///
/// White arriving first only arms a pending win; Black gets exactly one
/// reply to draw level. Black arriving first wins on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Race {
    /// Neither king has reached the far rank.
    #[default]
    Racing,
    /// White's king stands on the far rank and Black has one reply left.
    WhiteArmed,
    /// The game is over. Never holds [`GameState::InProgress`].
    Finished(GameState),
}

impl Race {
    /// Return the observable game state.
    #[inline]
    pub const fn state(self) -> GameState {
        match self {
            Race::Racing | Race::WhiteArmed => GameState::InProgress,
            Race::Finished(state) => state,
        }
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub const fn is_finished(self) -> bool {
        matches!(self, Race::Finished(_))
    }

    /// Transition after a successful king move by `mover`.
    ///
    /// `reached_far_rank` tells whether the king's destination is on the far rank.
    #[must_use]
    pub const fn after_king_move(self, mover: Color, reached_far_rank: bool) -> Race {
        match (self, mover) {
            (Race::WhiteArmed, Color::Black) => {
                if reached_far_rank {
                    Race::Finished(GameState::Tie)
                } else {
                    Race::Finished(GameState::WhiteWon)
                }
            }
            (Race::Racing, Color::Black) if reached_far_rank => {
                Race::Finished(GameState::BlackWon)
            }
            (Race::Racing, Color::White) if reached_far_rank => Race::WhiteArmed,
            (race, _) => race,
        }
    }

    /// Transition after a successful rook, bishop or knight move.
    ///
    /// Only a king can answer an armed White win, so any other move hands it over.
    #[must_use]
    pub const fn after_piece_move(self) -> Race {
        match self {
            Race::WhiteArmed => Race::Finished(GameState::WhiteWon),
            race => race,
        }
    }
}
