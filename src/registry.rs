//! Process-wide session registry mapping game ids to matches.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};

use crate::common::{GameError, GameId, PlayerId};
use crate::game::{Match, MatchStatus};

/// Listing entry for an open or running game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub status: MatchStatus,
    pub players: Vec<PlayerId>,
    pub turn: Option<PlayerId>,
}

/// Registry of live matches.
///
/// The map itself sits behind a coarse `RwLock` (inserts and removals are
/// rare next to in-match traffic); each match carries its own `Mutex`, so
/// mutations serialize per match without blocking unrelated games.
pub struct SessionRegistry {
    matches: RwLock<HashMap<GameId, Arc<Mutex<Match>>>>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            matches: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Open a fresh match in `Waiting` and return its id. Ids are monotonic
    /// and never reused.
    pub fn create(&self, name: &str) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = Arc::new(Mutex::new(Match::new(id, name)));
        self.matches.write().unwrap().insert(id, game);
        log::info!("game {}: created ({})", id, name);
        id
    }

    /// Handle to a match, if registered.
    pub fn get(&self, id: GameId) -> Option<Arc<Mutex<Match>>> {
        self.matches.read().unwrap().get(&id).cloned()
    }

    /// Run `f` under the match's exclusive lock.
    pub fn with_match<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Match) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let game = self.get(id).ok_or(GameError::NotFound)?;
        let mut guard = game.lock().unwrap();
        f(&mut guard)
    }

    /// Seat a player in a match.
    pub fn join(&self, id: GameId, player: PlayerId) -> Result<(), GameError> {
        self.with_match(id, |m| m.join(player))
    }

    /// Summaries of all registered games, ordered by id.
    pub fn list(&self) -> Vec<GameSummary> {
        let matches = self.matches.read().unwrap();
        let mut summaries: Vec<GameSummary> = matches
            .values()
            .map(|game| {
                let m = game.lock().unwrap();
                GameSummary {
                    id: m.id(),
                    name: m.name().to_string(),
                    status: m.status(),
                    players: m.players().collect(),
                    turn: m.turn_owner(),
                }
            })
            .collect();
        summaries.sort_by_key(|s| s.id);
        summaries
    }

    /// Drop a match from the registry. Entries are only ever removed through
    /// this explicit cleanup.
    pub fn remove(&self, id: GameId) -> bool {
        let removed = self.matches.write().unwrap().remove(&id).is_some();
        if removed {
            log::info!("game {}: removed", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.matches.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
