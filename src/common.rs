//! Common types: identifiers, coordinates, shot outcomes and the error taxonomy.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// Opaque game identifier issued by the session registry.
pub type GameId = u64;

/// Opaque player identifier supplied by the authentication collaborator.
pub type PlayerId = u64;

/// A position on the grid. `x` is the column, `y` the row; (0, 0) is top-left.
///
/// Deliberately carries no constructor invariant: out-of-range values must be
/// representable so the validator can report them as `OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Coord { x, y }
    }

    /// True when the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of a resolved shot.
///
/// Boards report `Miss`/`Hit`/`Sunk`; the match escalates the final `Sunk`
/// of a game to `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot struck an unsunk ship segment.
    Hit,
    /// Shot struck the last intact segment of the named ship.
    Sunk(ShipKind),
    /// The sunk ship was the defender's last; the match is over.
    GameOver { winner: PlayerId, ship: ShipKind },
}

/// Placement rule violations, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The ship type is already placed on this board.
    DuplicateShipType,
    /// A footprint cell lies outside the grid.
    OutOfBounds,
    /// The footprint is not a straight contiguous run of the type's length.
    InvalidShape,
    /// The footprint coincides with another ship's cells.
    Overlap,
    /// The footprint touches another ship's 8-neighborhood halo.
    TooClose,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::DuplicateShipType => write!(f, "ship type is already placed"),
            PlacementError::OutOfBounds => write!(f, "placement is out of bounds"),
            PlacementError::InvalidShape => write!(f, "placement is not a straight run of the required length"),
            PlacementError::Overlap => write!(f, "placement overlaps another ship"),
            PlacementError::TooClose => write!(f, "placement touches another ship"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned by match, board and registry operations.
///
/// Every variant is recoverable and leaves state untouched. `UnknownShipHit`
/// and `BitBoard` signal an internal invariant violation: the operation is
/// aborted loudly instead of coercing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A placement request broke one of the validation rules.
    Placement(PlacementError),
    /// Shot aimed off the grid.
    OutOfBounds,
    /// The acting player does not hold the turn pointer.
    NotYourTurn,
    /// The match is not in the phase this operation requires.
    GameNotInProgress,
    /// The match already ended.
    GameFinished,
    /// The target cell was already resolved to hit or miss.
    AlreadyTargeted,
    /// Two players already joined this match.
    GameFull,
    /// No match registered under this game id.
    NotFound,
    /// The player id is not seated in this match.
    UnknownPlayer,
    /// Random placement gave up after too many failed attempts.
    UnableToPlace,
    /// The ship map marks a cell no placed ship owns.
    UnknownShipHit,
    /// Underlying bitboard error (index or capacity).
    BitBoard(BitBoardError),
}

impl GameError {
    /// Stable snake_case code for transport collaborators.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::Placement(PlacementError::DuplicateShipType) => "duplicate_ship_type",
            GameError::Placement(PlacementError::OutOfBounds) | GameError::OutOfBounds => {
                "out_of_bounds"
            }
            GameError::Placement(PlacementError::InvalidShape) => "invalid_shape",
            GameError::Placement(PlacementError::Overlap) => "overlap",
            GameError::Placement(PlacementError::TooClose) => "too_close",
            GameError::NotYourTurn => "not_your_turn",
            GameError::GameNotInProgress => "game_not_in_progress",
            GameError::GameFinished => "game_finished",
            GameError::AlreadyTargeted => "already_targeted",
            GameError::GameFull => "game_full",
            GameError::NotFound => "not_found",
            GameError::UnknownPlayer => "unknown_player",
            GameError::UnableToPlace => "unable_to_place",
            GameError::UnknownShipHit | GameError::BitBoard(_) => "internal_error",
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Placement(e) => write!(f, "invalid placement: {}", e),
            GameError::OutOfBounds => write!(f, "shot is out of bounds"),
            GameError::NotYourTurn => write!(f, "it is not this player's turn"),
            GameError::GameNotInProgress => write!(f, "the game is not in the required phase"),
            GameError::GameFinished => write!(f, "the game is already finished"),
            GameError::AlreadyTargeted => write!(f, "cell was already targeted"),
            GameError::GameFull => write!(f, "the game already has two players"),
            GameError::NotFound => write!(f, "no game with that id"),
            GameError::UnknownPlayer => write!(f, "player is not part of this game"),
            GameError::UnableToPlace => write!(f, "unable to find a legal placement"),
            GameError::UnknownShipHit => write!(f, "ship map marks a cell no ship owns"),
            GameError::BitBoard(e) => write!(f, "bitboard error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
