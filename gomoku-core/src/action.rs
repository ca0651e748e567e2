use crate::{GomokuColor, GomokuCoord};

/// The shape of an action a player can submit within a phase.
///
/// `FullSwap1` and `ChooseColor` are accepted as syntactically valid input but
/// are not functionally complete: `FullSwap1` only passes the turn (it should
/// place the three opening stones), and `ChooseColor` is rejected with
/// `Unimplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GomokuMoveType {
    PlaceOnly,
    PlaceAndClock,
    ClockOnly,
    FullSwap1,
    ChooseColor,
}

impl GomokuMoveType {
    pub const ALL: [GomokuMoveType; 5] = [
        GomokuMoveType::PlaceOnly,
        GomokuMoveType::PlaceAndClock,
        GomokuMoveType::ClockOnly,
        GomokuMoveType::FullSwap1,
        GomokuMoveType::ChooseColor,
    ];

    pub fn requires_stone(&self) -> bool {
        matches!(
            self,
            GomokuMoveType::PlaceOnly | GomokuMoveType::PlaceAndClock
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GomokuStone {
    pub pos: GomokuCoord,
    pub color: GomokuColor,
}

impl GomokuStone {
    pub fn new(x: i32, y: i32, color: GomokuColor) -> Self {
        GomokuStone {
            pos: GomokuCoord::new(x, y),
            color,
        }
    }
}

/// An entry in the append-only move log. Holds zero or one stones in the
/// current rule set; the vector form leaves room for the three-stone swap
/// opening once it exists.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GomokuMove {
    pub stones: Vec<GomokuStone>,
    pub press_clock: bool,
}

/// A move as submitted by a caller, before it has been validated and recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GomokuAction {
    pub move_type: GomokuMoveType,
    pub stone: Option<GomokuStone>,
}

impl GomokuAction {
    pub fn place_only(stone: GomokuStone) -> Self {
        GomokuAction {
            move_type: GomokuMoveType::PlaceOnly,
            stone: Some(stone),
        }
    }

    pub fn place_and_clock(stone: GomokuStone) -> Self {
        GomokuAction {
            move_type: GomokuMoveType::PlaceAndClock,
            stone: Some(stone),
        }
    }

    pub fn clock_only() -> Self {
        GomokuAction {
            move_type: GomokuMoveType::ClockOnly,
            stone: None,
        }
    }
}
