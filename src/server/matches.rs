use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use gomoku_core::{GomokuAction, GomokuGame, GomokuPhase, GomokuPlayer};

use crate::server::{
    GameId, UserId,
    dto::GameStatusBroadcast,
    error::{ServerError, ServerResult},
    pub_sub::SUBSCRIPTIONS,
};

/// Engine state plus the seat-to-user binding for one running match.
pub struct MatchData {
    pub game: GomokuGame,
    pub player_mapping: fixed_map::Map<GomokuPlayer, UserId>,
}

impl MatchData {
    fn new(player_id: UserId, opponent_id: UserId) -> Self {
        let mut player_mapping = fixed_map::Map::new();
        player_mapping.insert(GomokuPlayer::One, player_id);
        player_mapping.insert(GomokuPlayer::Two, opponent_id);
        MatchData {
            game: GomokuGame::new(),
            player_mapping,
        }
    }

    fn seat_of(&self, user_id: &UserId) -> Option<GomokuPlayer> {
        self.player_mapping
            .iter()
            .find(|&(_, id)| id == user_id)
            .map(|(player, _)| player)
    }

    fn player_ids(&self) -> Vec<UserId> {
        GomokuPlayer::ALL
            .into_iter()
            .filter_map(|player| self.player_mapping.get(player).cloned())
            .collect()
    }
}

/// Each match sits behind its own mutex: at most one in-flight mutation per
/// game id, so a move is always a serialized read-modify-write.
pub struct Matches {
    matches: Arc<DashMap<GameId, Arc<tokio::sync::Mutex<MatchData>>>>,
    players: Arc<DashMap<UserId, GameId>>,
}

pub static MATCHES: LazyLock<Matches> = LazyLock::new(Matches::new);

impl Matches {
    fn new() -> Self {
        Matches {
            matches: Arc::new(DashMap::new()),
            players: Arc::new(DashMap::new()),
        }
    }

    fn has_match(&self, player_id: &UserId) -> bool {
        self.players.contains_key(player_id)
    }

    fn get_match(&self, game_id: &GameId) -> ServerResult<Arc<tokio::sync::Mutex<MatchData>>> {
        self.matches
            .get(game_id)
            .map(|entry| entry.value().clone())
            .ok_or(ServerError::NotFound)
    }
}

pub fn create_match(player_id: &UserId, opponent_id: &UserId) -> ServerResult<GameId> {
    if player_id == opponent_id {
        return Err(ServerError::BadRequest(
            "Cannot play against yourself".to_string(),
        ));
    }
    if MATCHES.has_match(player_id) || MATCHES.has_match(opponent_id) {
        return Err(ServerError::Conflict(
            "Match already exists for this player".to_string(),
        ));
    }
    let game_id = uuid::Uuid::new_v4().to_string();
    let match_data = MatchData::new(player_id.clone(), opponent_id.clone());
    MATCHES.matches.insert(
        game_id.clone(),
        Arc::new(tokio::sync::Mutex::new(match_data)),
    );
    MATCHES.players.insert(player_id.clone(), game_id.clone());
    MATCHES.players.insert(opponent_id.clone(), game_id.clone());
    log::info!("Created match {game_id} for {player_id} vs {opponent_id}");
    Ok(game_id)
}

/// Applies a submitted move on behalf of a user and pushes the updated status
/// to the game's subscribers.
///
/// The identity-to-seat binding is enforced here, before the engine is
/// invoked; the engine's `player_on_turn` is advisory data only.
pub async fn handle_player_move(
    user_id: &UserId,
    game_id: &GameId,
    action: GomokuAction,
) -> ServerResult<()> {
    let match_ref = MATCHES.get_match(game_id)?;
    let mut match_data = match_ref.lock().await;

    let seat = match_data.seat_of(user_id).ok_or(ServerError::NotFound)?;
    if seat != match_data.game.player_on_turn {
        return Err(ServerError::NotYourTurn);
    }
    match_data
        .game
        .try_play_move(action)
        .map_err(ServerError::InvalidMove)?;

    let status =
        GameStatusBroadcast::from_game(game_id.clone(), match_data.player_ids(), &match_data.game);
    SUBSCRIPTIONS.publish(game_id, status);

    if match_data.game.phase == GomokuPhase::Ended {
        log::info!(
            "Match {game_id} ended, winner color: {:?}",
            match_data.game.board().find_five_in_a_row()
        );
    }
    Ok(())
}

/// Current status view for late joiners and reconnects.
pub async fn get_status(game_id: &GameId) -> ServerResult<GameStatusBroadcast> {
    let match_ref = MATCHES.get_match(game_id)?;
    let match_data = match_ref.lock().await;
    Ok(GameStatusBroadcast::from_game(
        game_id.clone(),
        match_data.player_ids(),
        &match_data.game,
    ))
}

/// The serialized engine state, read and written verbatim by the persistence
/// layer. Opaque to the transport.
pub async fn get_state_blob(game_id: &GameId) -> ServerResult<String> {
    let match_ref = MATCHES.get_match(game_id)?;
    let match_data = match_ref.lock().await;
    serde_json::to_string(&match_data.game)
        .map_err(|e| ServerError::InternalServerError(e.to_string()))
}

pub fn close_match(game_id: &GameId) -> ServerResult<()> {
    let Some((_, match_ref)) = MATCHES.matches.remove(game_id) else {
        return Err(ServerError::NotFound);
    };
    MATCHES.players.retain(|_, id| id != game_id);
    SUBSCRIPTIONS.drop_topic(game_id);
    drop(match_ref);
    log::info!("Closed match {game_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::{GomokuColor, GomokuStone};

    fn users(test: &str) -> (UserId, UserId) {
        (format!("{test}-alice"), format!("{test}-bob"))
    }

    fn black(x: i32, y: i32) -> GomokuStone {
        GomokuStone::new(x, y, GomokuColor::Black)
    }

    #[tokio::test]
    async fn test_create_match_rejects_second_match_per_player() {
        let (alice, bob) = users("dup");
        let game_id = create_match(&alice, &bob).unwrap();
        assert!(matches!(
            create_match(&alice, &"dup-carol".to_string()),
            Err(ServerError::Conflict(_))
        ));
        close_match(&game_id).unwrap();
    }

    #[tokio::test]
    async fn test_move_by_wrong_seat_is_rejected() {
        let (alice, bob) = users("turn");
        let game_id = create_match(&alice, &bob).unwrap();

        let result =
            handle_player_move(&bob, &game_id, GomokuAction::place_only(black(7, 7))).await;
        assert!(matches!(result, Err(ServerError::NotYourTurn)));

        handle_player_move(&alice, &game_id, GomokuAction::place_only(black(7, 7)))
            .await
            .unwrap();
        close_match(&game_id).unwrap();
    }

    #[tokio::test]
    async fn test_move_by_stranger_is_rejected() {
        let (alice, bob) = users("stranger");
        let game_id = create_match(&alice, &bob).unwrap();
        let mallory = "stranger-mallory".to_string();
        let result =
            handle_player_move(&mallory, &game_id, GomokuAction::place_only(black(7, 7))).await;
        assert!(matches!(result, Err(ServerError::NotFound)));
        close_match(&game_id).unwrap();
    }

    #[tokio::test]
    async fn test_broadcast_follows_accepted_moves() {
        let (alice, bob) = users("broadcast");
        let game_id = create_match(&alice, &bob).unwrap();
        let mut receiver = SUBSCRIPTIONS.subscribe(&game_id);

        handle_player_move(&alice, &game_id, GomokuAction::place_only(black(7, 7)))
            .await
            .unwrap();

        let status = receiver.recv().await.unwrap();
        assert_eq!(status.game_id, game_id);
        assert_eq!(status.players, vec![alice.clone(), bob.clone()]);
        assert_eq!(status.board[7][7], 1);
        let next_turn = status.next_turn.unwrap();
        assert_eq!(next_turn.player, 0);
        assert_eq!(next_turn.stone, 2);
        close_match(&game_id).unwrap();
    }

    #[tokio::test]
    async fn test_state_blob_round_trips() {
        let (alice, bob) = users("blob");
        let game_id = create_match(&alice, &bob).unwrap();
        handle_player_move(&alice, &game_id, GomokuAction::place_only(black(7, 7)))
            .await
            .unwrap();

        let blob = get_state_blob(&game_id).await.unwrap();
        let restored: GomokuGame = serde_json::from_str(&blob).unwrap();
        let match_ref = MATCHES.get_match(&game_id).unwrap();
        assert_eq!(&restored, &match_ref.lock().await.game);
        close_match(&game_id).unwrap();
    }

    #[tokio::test]
    async fn test_closed_match_is_gone() {
        let (alice, bob) = users("close");
        let game_id = create_match(&alice, &bob).unwrap();
        close_match(&game_id).unwrap();
        assert!(matches!(
            get_status(&game_id).await,
            Err(ServerError::NotFound)
        ));
        // Players are free again.
        let game_id = create_match(&alice, &bob).unwrap();
        close_match(&game_id).unwrap();
    }
}
