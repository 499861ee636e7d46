//! Match state: two boards, the turn pointer and the lifecycle state machine.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{Coord, GameError, GameId, PlayerId, ShotOutcome};
use crate::placement::Placement;
use crate::view::BoardView;

/// Lifecycle of a match. Transitions are one-way:
/// `Waiting → Placing → InProgress → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Created, fewer than two players.
    Waiting,
    /// Both players joined; fleets being placed.
    Placing,
    /// Both fleets complete; alternating fire.
    InProgress,
    /// One fleet fully sunk.
    Finished,
}

/// One complete game between two players.
///
/// The match is the single authority on placement legality, turn order and
/// the win condition; callers only ever observe it through views and status.
pub struct Match {
    id: GameId,
    name: String,
    players: [Option<PlayerId>; 2],
    boards: [Board; 2],
    turn: usize,
    status: MatchStatus,
    winner: Option<PlayerId>,
}

impl Match {
    /// Open a match with no players seated.
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Match {
            id,
            name: name.into(),
            players: [None, None],
            boards: [Board::new(), Board::new()],
            turn: 0,
            status: MatchStatus::Waiting,
            winner: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Players seated so far, creator first.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().flatten().copied()
    }

    /// The player who may act next, only meaningful while the match is in
    /// progress.
    pub fn turn_owner(&self) -> Option<PlayerId> {
        if self.status == MatchStatus::InProgress {
            self.players[self.turn]
        } else {
            None
        }
    }

    /// Seat a player. Re-joining by a seated player is an idempotent no-op;
    /// a third distinct player is rejected with `GameFull`. The second join
    /// moves the match to `Placing`.
    pub fn join(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.players.iter().any(|p| *p == Some(player)) {
            return Ok(());
        }
        match self.players.iter().position(Option::is_none) {
            Some(seat) => {
                self.players[seat] = Some(player);
                if self.players.iter().all(Option::is_some) {
                    self.status = MatchStatus::Placing;
                    log::info!("game {}: both players seated, placement begins", self.id);
                }
                Ok(())
            }
            None => Err(GameError::GameFull),
        }
    }

    /// Place a ship on the acting player's own board. Legal only in the
    /// `Placing` phase; the match moves to `InProgress` once both fleets are
    /// complete, with the creator to act first.
    pub fn place_ship(&mut self, player: PlayerId, placement: &Placement) -> Result<(), GameError> {
        let seat = self.seat_of(player)?;
        match self.status {
            MatchStatus::Placing => {}
            MatchStatus::Finished => return Err(GameError::GameFinished),
            MatchStatus::Waiting | MatchStatus::InProgress => {
                return Err(GameError::GameNotInProgress)
            }
        }
        self.boards[seat].place(placement)?;
        if self.boards.iter().all(Board::fleet_complete) {
            self.status = MatchStatus::InProgress;
            self.turn = 0;
            log::info!("game {}: fleets complete, battle begins", self.id);
        }
        Ok(())
    }

    /// Resolve a shot by `player` at the opponent's board.
    ///
    /// The turn pointer flips to the opponent after every resolved shot,
    /// hit or miss; a sinking that empties the fleet finishes the match and
    /// escalates the outcome to `GameOver` instead.
    pub fn attack(&mut self, player: PlayerId, target: Coord) -> Result<ShotOutcome, GameError> {
        let seat = self.seat_of(player)?;
        match self.status {
            MatchStatus::InProgress => {}
            MatchStatus::Finished => return Err(GameError::GameFinished),
            MatchStatus::Waiting | MatchStatus::Placing => {
                return Err(GameError::GameNotInProgress)
            }
        }
        if seat != self.turn {
            return Err(GameError::NotYourTurn);
        }
        let opponent = 1 - seat;
        let outcome = self.boards[opponent].resolve_shot(target)?;
        if let ShotOutcome::Sunk(ship) = outcome {
            if self.boards[opponent].all_sunk() {
                self.status = MatchStatus::Finished;
                self.winner = Some(player);
                log::info!("game {}: player {} wins", self.id, player);
                return Ok(ShotOutcome::GameOver { winner: player, ship });
            }
        }
        self.turn = opponent;
        Ok(outcome)
    }

    /// Owner view of the player's own board and the censored view of the
    /// opponent's, in that order.
    pub fn views_for(&self, player: PlayerId) -> Result<(BoardView, BoardView), GameError> {
        let seat = self.seat_of(player)?;
        Ok((
            self.boards[seat].view_for(true),
            self.boards[1 - seat].view_for(false),
        ))
    }

    /// Direct access to a seated player's own board.
    pub fn board_of(&self, player: PlayerId) -> Result<&Board, GameError> {
        let seat = self.seat_of(player)?;
        Ok(&self.boards[seat])
    }

    fn seat_of(&self, player: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| *p == Some(player))
            .ok_or(GameError::UnknownPlayer)
    }
}
