//! The request/response boundary exposed to transport collaborators.
//!
//! Transports (HTTP, in-process, test harnesses) talk to the core through
//! [`GameService`] and never reach into boards or matches directly. The core
//! itself is synchronous; the trait is async only so network frontends can
//! await it naturally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::{Coord, GameError, GameId, PlayerId, ShotOutcome};
use crate::game::MatchStatus;
use crate::placement::Placement;
use crate::registry::{GameSummary, SessionRegistry};
use crate::view::BoardView;

/// Everything a client may know about a game at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: MatchStatus,
    pub turn: Option<PlayerId>,
    /// The requesting player's own board, ships visible.
    pub own: BoardView,
    /// The opponent's board, ships suppressed.
    pub opponent: BoardView,
}

/// Game operations offered to the outside world.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Open a new game and return its id.
    async fn create_game(&self, name: &str) -> GameId;

    /// Seat a player in an existing game.
    async fn join_game(&self, game: GameId, player: PlayerId) -> Result<(), GameError>;

    /// Place one ship on the player's own board.
    async fn place_ship(
        &self,
        game: GameId,
        player: PlayerId,
        placement: Placement,
    ) -> Result<(), GameError>;

    /// Fire at the opponent's board.
    async fn attack(
        &self,
        game: GameId,
        player: PlayerId,
        target: Coord,
    ) -> Result<ShotOutcome, GameError>;

    /// Current status and both views from the player's perspective.
    async fn game_status(&self, game: GameId, player: PlayerId)
        -> Result<StatusReport, GameError>;

    /// Summaries of all registered games.
    async fn list_games(&self) -> Vec<GameSummary>;
}

#[async_trait]
impl GameService for SessionRegistry {
    async fn create_game(&self, name: &str) -> GameId {
        self.create(name)
    }

    async fn join_game(&self, game: GameId, player: PlayerId) -> Result<(), GameError> {
        self.join(game, player)
    }

    async fn place_ship(
        &self,
        game: GameId,
        player: PlayerId,
        placement: Placement,
    ) -> Result<(), GameError> {
        self.with_match(game, |m| m.place_ship(player, &placement))
    }

    async fn attack(
        &self,
        game: GameId,
        player: PlayerId,
        target: Coord,
    ) -> Result<ShotOutcome, GameError> {
        self.with_match(game, |m| m.attack(player, target))
    }

    async fn game_status(
        &self,
        game: GameId,
        player: PlayerId,
    ) -> Result<StatusReport, GameError> {
        self.with_match(game, |m| {
            let (own, opponent) = m.views_for(player)?;
            Ok(StatusReport {
                status: m.status(),
                turn: m.turn_owner(),
                own,
                opponent,
            })
        })
    }

    async fn list_games(&self) -> Vec<GameSummary> {
        self.list()
    }
}
