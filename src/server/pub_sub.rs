use std::sync::LazyLock;

use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::server::{GameId, dto::GameStatusBroadcast};

const CHANNEL_CAPACITY: usize = 16;

/// Subscription registry keyed by game id, with push-on-change semantics.
/// Owned by the service layer; the engine knows nothing about it.
pub struct Subscriptions {
    topics: DashMap<GameId, broadcast::Sender<GameStatusBroadcast>>,
}

pub static SUBSCRIPTIONS: LazyLock<Subscriptions> = LazyLock::new(Subscriptions::new);

impl Subscriptions {
    fn new() -> Self {
        Subscriptions {
            topics: DashMap::new(),
        }
    }

    pub fn subscribe(&self, game_id: &GameId) -> broadcast::Receiver<GameStatusBroadcast> {
        self.topics
            .entry(game_id.clone())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Pushes a status to every subscriber of the game. A game without
    /// subscribers is not an error.
    pub fn publish(&self, game_id: &GameId, status: GameStatusBroadcast) {
        if let Some(sender) = self.topics.get(game_id) {
            let _ = sender.send(status);
        }
    }

    pub fn drop_topic(&self, game_id: &GameId) {
        self.topics.remove(game_id);
    }
}
