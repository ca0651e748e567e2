use gomoku_core::{GomokuAction, GomokuGame, GomokuMoveType, GomokuPhase};
use serde::{Deserialize, Serialize};

use crate::server::{GameId, UserId};

/// Engine input envelope as received from the transport. Identity and turn
/// ownership are checked by the caller before the action reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMessage {
    pub game_id: GameId,
    pub action: GomokuAction,
}

/// Per-game fan-out view, derived from the engine state after every accepted
/// move. Board cells: 0 empty, 1 black, 2 white; always 15x15.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusBroadcast {
    pub game_id: GameId,
    pub players: Vec<UserId>,
    pub board: Vec<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_turn: Option<NextTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTurn {
    pub player: u8,
    pub stone: u8,
    pub allowed_move_types: Vec<GomokuMoveType>,
}

impl GameStatusBroadcast {
    pub fn from_game(game_id: GameId, players: Vec<UserId>, game: &GomokuGame) -> Self {
        let next_turn = (game.phase != GomokuPhase::Ended).then(|| NextTurn {
            player: game.player_on_turn.index() as u8,
            stone: game.next_stone_color().value(),
            allowed_move_types: game.legal_move_types(),
        });
        GameStatusBroadcast {
            game_id,
            players,
            board: game.board().to_matrix(),
            next_turn,
        }
    }
}
