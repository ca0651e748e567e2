use crate::{
    GomokuAction, GomokuBoard, GomokuColor, GomokuInvalidMoveError, GomokuMove, GomokuMoveType,
    GomokuPlayer, next_stone_color,
};

/// The opening/midgame/terminal phase of a match. Conceptually ordered but not
/// linear; some phases have multiple successors depending on the move type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GomokuPhase {
    /// Waiting for the swap-1 opening.
    Started,
    PlacedSwap1First,
    PlacedSwap1Second,
    /// The full swap-1 triple has been placed.
    PlacedSwap1Complete,
    PlacedSwap2First,
    /// The full swap-2 extension has been placed.
    PlacedSwap2Complete,
    /// Colors are settled; plain alternating play.
    MiddleGame,
    Ended,
}

/// The effect a legal move type has in a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveEffect {
    Apply {
        place_stone: bool,
        advance_turn: bool,
        next_phase: GomokuPhase,
    },
    /// Legal per the opening rule but without a defined effect yet.
    Unimplemented,
}

fn apply(place_stone: bool, advance_turn: bool, next_phase: GomokuPhase) -> Option<MoveEffect> {
    Some(MoveEffect::Apply {
        place_stone,
        advance_turn,
        next_phase,
    })
}

/// The one transition table. Both the enforcement path (`try_play_move`) and
/// the hinting path (`legal_move_types`) are derived from it, so the two can
/// not drift apart. `None` means the move type is illegal in the phase.
///
/// The outer match is exhaustive over the closed phase enum; a new phase
/// without transitions is a compile error, not a runtime surprise.
fn transition(phase: GomokuPhase, move_type: GomokuMoveType) -> Option<MoveEffect> {
    use GomokuMoveType::*;
    use GomokuPhase::*;
    match phase {
        Started => match move_type {
            PlaceOnly => apply(true, false, PlacedSwap1First),
            // Should place the three swap-1 opening stones at once; the
            // implemented rule only passes the turn. Known incompleteness,
            // reproduced as observed.
            FullSwap1 => apply(false, true, PlacedSwap1Complete),
            _ => None,
        },
        PlacedSwap1First => match move_type {
            PlaceOnly => apply(true, false, PlacedSwap1Second),
            _ => None,
        },
        PlacedSwap1Second => match move_type {
            PlaceAndClock => apply(true, true, PlacedSwap1Complete),
            _ => None,
        },
        PlacedSwap1Complete => match move_type {
            PlaceOnly => apply(true, false, PlacedSwap2First),
            ClockOnly => apply(false, true, MiddleGame),
            PlaceAndClock => apply(true, true, MiddleGame),
            ChooseColor => Some(MoveEffect::Unimplemented),
            _ => None,
        },
        PlacedSwap2First => match move_type {
            PlaceAndClock => apply(true, true, PlacedSwap2Complete),
            ClockOnly => apply(false, true, MiddleGame),
            _ => None,
        },
        PlacedSwap2Complete => match move_type {
            ClockOnly => apply(false, true, MiddleGame),
            PlaceAndClock => apply(true, true, MiddleGame),
            ChooseColor => Some(MoveEffect::Unimplemented),
            _ => None,
        },
        MiddleGame => match move_type {
            PlaceAndClock => apply(true, true, MiddleGame),
            _ => None,
        },
        Ended => None,
    }
}

impl GomokuPhase {
    /// The exact set of move types `try_play_move` would not reject with
    /// `IllegalMoveType` in this phase. Empty for `Ended`.
    pub fn legal_move_types(&self) -> Vec<GomokuMoveType> {
        GomokuMoveType::ALL
            .into_iter()
            .filter(|move_type| transition(*self, *move_type).is_some())
            .collect()
    }

    pub fn is_legal_move_type(&self, move_type: GomokuMoveType) -> bool {
        transition(*self, move_type).is_some()
    }
}

/// The single persisted aggregate: phase, seat on turn, and the append-only
/// move log. The board is never stored; it is recomputed from the log. With
/// the `serde` feature enabled this struct is the opaque state blob the
/// persistence layer reads and writes verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GomokuGame {
    pub phase: GomokuPhase,
    pub player_on_turn: GomokuPlayer,
    pub moves: Vec<GomokuMove>,
}

impl GomokuGame {
    pub fn new() -> Self {
        GomokuGame {
            phase: GomokuPhase::Started,
            player_on_turn: GomokuPlayer::One,
            moves: Vec::new(),
        }
    }

    /// Validates and applies a submitted move.
    ///
    /// Validation happens strictly before any mutation, so a rejected move
    /// leaves the state untouched. On success the move is appended to the log
    /// (when it places a stone), the phase and turn are updated, and the
    /// re-projected board is checked for a win; a winning run forces the phase
    /// to `Ended`, overriding whatever the transition produced.
    pub fn try_play_move(&mut self, action: GomokuAction) -> Result<(), GomokuInvalidMoveError> {
        if self.phase == GomokuPhase::Ended {
            return Err(GomokuInvalidMoveError::GameEnded);
        }
        let Some(effect) = transition(self.phase, action.move_type) else {
            return Err(GomokuInvalidMoveError::IllegalMoveType {
                phase: self.phase,
                move_type: action.move_type,
            });
        };
        if action.move_type.requires_stone() && action.stone.is_none() {
            return Err(GomokuInvalidMoveError::MissingStone(action.move_type));
        }
        let MoveEffect::Apply {
            place_stone,
            advance_turn,
            next_phase,
        } = effect
        else {
            return Err(GomokuInvalidMoveError::Unimplemented(action.move_type));
        };

        if place_stone {
            // Every placing transition has a stone-requiring move type, so the
            // presence check above already ruled out `None`.
            let stone = action
                .stone
                .ok_or(GomokuInvalidMoveError::MissingStone(action.move_type))?;
            self.moves.push(GomokuMove {
                stones: vec![stone],
                press_clock: false,
            });
        }
        if advance_turn {
            self.player_on_turn = self.player_on_turn.other();
        }
        self.phase = next_phase;

        if self.board().find_five_in_a_row() != GomokuColor::Empty {
            self.phase = GomokuPhase::Ended;
        }
        Ok(())
    }

    /// Recomputes the board projection from the move log.
    pub fn board(&self) -> GomokuBoard {
        GomokuBoard::from_moves(&self.moves)
    }

    pub fn legal_move_types(&self) -> Vec<GomokuMoveType> {
        self.phase.legal_move_types()
    }

    pub fn next_stone_color(&self) -> GomokuColor {
        next_stone_color(&self.moves)
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        GomokuGame::new()
    }
}
