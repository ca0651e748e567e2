mod action;
mod board;
mod coord;
mod game;

pub use action::*;
pub use board::*;
pub use coord::*;
pub use game::*;

/// Side length of the board. The ruleset is defined on a 15x15 grid,
/// independent of any board size a caller may have configured elsewhere.
pub const BOARD_SIZE: usize = 15;

/// A cell value. `Empty` is a valid stone color in the move log; projecting
/// such a stone clears the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GomokuColor {
    Empty,
    Black,
    White,
}

impl GomokuColor {
    /// Wire encoding: 0 = empty, 1 = black, 2 = white.
    pub fn value(&self) -> u8 {
        match self {
            GomokuColor::Empty => 0,
            GomokuColor::Black => 1,
            GomokuColor::White => 2,
        }
    }

    pub fn try_from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(GomokuColor::Empty),
            1 => Some(GomokuColor::Black),
            2 => Some(GomokuColor::White),
            _ => None,
        }
    }

    /// The color that alternation would place after this one. Black opens,
    /// so `Empty` yields `Black`.
    pub fn next(&self) -> GomokuColor {
        match self {
            GomokuColor::Empty => GomokuColor::Black,
            GomokuColor::Black => GomokuColor::White,
            GomokuColor::White => GomokuColor::Black,
        }
    }
}

/// A seat at the table. Seats are not bound to stone colors; the swap opening
/// decides colors outside of the engine's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, fixed_map::Key)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GomokuPlayer {
    One,
    Two,
}

impl GomokuPlayer {
    pub const ALL: [GomokuPlayer; 2] = [GomokuPlayer::One, GomokuPlayer::Two];

    pub fn other(&self) -> Self {
        match self {
            GomokuPlayer::One => GomokuPlayer::Two,
            GomokuPlayer::Two => GomokuPlayer::One,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            GomokuPlayer::One => 0,
            GomokuPlayer::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GomokuInvalidMoveError {
    /// The move type is not in the legality set of the current phase.
    IllegalMoveType {
        phase: GomokuPhase,
        move_type: GomokuMoveType,
    },
    /// The move type requires a stone payload and none was supplied.
    MissingStone(GomokuMoveType),
    /// The move type is legal for the phase but has no defined effect.
    Unimplemented(GomokuMoveType),
    /// The game has reached `Ended`; no move type is accepted anymore.
    GameEnded,
    /// Kept for wire parity with the error taxonomy. The engine never
    /// constructs this: `GomokuPhase` is a closed enum and the transition
    /// table matches it exhaustively.
    UnknownPhase,
}
