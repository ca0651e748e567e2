use gomoku_core::{GomokuAction, GomokuColor, GomokuStone};

mod server;

use server::dto::MoveMessage;
use server::error::ServerResult;
use server::pub_sub::SUBSCRIPTIONS;
use server::{UserId, matches};

#[tokio::main]
async fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("Invalid log specification")
        .start()
        .expect("Failed to start logger");

    if let Err(e) = run_demo_match().await {
        log::error!("Demo match failed: {e}");
    }
}

/// Drives a scripted match through the full service path: create, subscribe,
/// play the swap-1 opening into the middle game, finish with a black
/// five-in-a-row. Stands in for the network transport.
async fn run_demo_match() -> ServerResult<()> {
    let alice: UserId = "alice".to_string();
    let bob: UserId = "bob".to_string();
    let game_id = matches::create_match(&alice, &bob)?;

    let status = matches::get_status(&game_id).await?;
    log::info!(
        "Game {} created with players {:?}",
        status.game_id,
        status.players
    );

    let mut receiver = SUBSCRIPTIONS.subscribe(&game_id);
    let listener = tokio::spawn(async move {
        while let Ok(status) = receiver.recv().await {
            match status.next_turn {
                Some(next_turn) => log::info!(
                    "Game {}: player {} to move, suggested stone {}, allowed: {:?}",
                    status.game_id,
                    next_turn.player,
                    next_turn.stone,
                    next_turn.allowed_move_types
                ),
                None => {
                    log::info!("Game {}: ended", status.game_id);
                    break;
                }
            }
        }
    });

    let black = |x, y| GomokuStone::new(x, y, GomokuColor::Black);
    let white = |x, y| GomokuStone::new(x, y, GomokuColor::White);

    let script = [
        // Swap-1 opening: the first player places the whole triple.
        (&alice, GomokuAction::place_only(black(7, 7))),
        (&alice, GomokuAction::place_only(white(7, 8))),
        (&alice, GomokuAction::place_and_clock(black(8, 7))),
        // The second player keeps the position as-is.
        (&bob, GomokuAction::clock_only()),
        (&alice, GomokuAction::place_and_clock(black(0, 0))),
        (&bob, GomokuAction::place_and_clock(white(9, 9))),
        (&alice, GomokuAction::place_and_clock(black(1, 0))),
        (&bob, GomokuAction::place_and_clock(white(9, 10))),
        (&alice, GomokuAction::place_and_clock(black(2, 0))),
        (&bob, GomokuAction::place_and_clock(white(9, 11))),
        (&alice, GomokuAction::place_and_clock(black(3, 0))),
        (&bob, GomokuAction::place_and_clock(white(9, 12))),
        (&alice, GomokuAction::place_and_clock(black(4, 0))),
    ];
    for (user, action) in script {
        // Round-trip through the wire envelope, as the transport would.
        let envelope = MoveMessage {
            game_id: game_id.clone(),
            action,
        };
        let raw = serde_json::to_string(&envelope)
            .map_err(|e| server::error::ServerError::InternalServerError(e.to_string()))?;
        let envelope: MoveMessage = serde_json::from_str(&raw)
            .map_err(|e| server::error::ServerError::BadRequest(e.to_string()))?;
        matches::handle_player_move(user, &envelope.game_id, envelope.action).await?;
    }

    if let Err(e) =
        matches::handle_player_move(&bob, &game_id, GomokuAction::place_and_clock(white(9, 13)))
            .await
    {
        log::info!("Move after game end rejected as expected: {e}");
    }

    let blob = matches::get_state_blob(&game_id).await?;
    log::info!("Persisted state blob ({} bytes)", blob.len());

    let _ = listener.await;
    matches::close_match(&game_id)?;
    Ok(())
}
