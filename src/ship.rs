//! Ship kinds and placed-ship records backed by `BitBoard` masks.

use core::fmt;

use num_traits::{PrimInt, Unsigned, Zero};
use serde::{Deserialize, Serialize};

use crate::bitboard::BitBoard;
use crate::common::{Coord, GameError};
use crate::config::NUM_SHIPS;
use crate::placement::Placement;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five ship types of the standard fleet.
///
/// Each board places exactly one of each; the kind doubles as the ship's
/// identity within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// The required fleet, in descending length order.
    pub const ALL: [ShipKind; NUM_SHIPS] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Fixed length of the kind.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Display name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Slot index within a board's fleet array.
    pub(crate) const fn index(self) -> usize {
        match self {
            ShipKind::Carrier => 0,
            ShipKind::Battleship => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 4,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on an N×N board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    kind: ShipKind,
    orientation: Orientation,
    anchor: Coord,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Build a ship from an already-validated placement footprint.
    pub(crate) fn from_placement(placement: &Placement) -> Result<Self, GameError> {
        let anchor = placement
            .anchor()
            .ok_or(GameError::Placement(crate::common::PlacementError::InvalidShape))?;
        let mut mask = BitBoard::<T, N>::new();
        for c in placement.cells() {
            mask.set(c.x as usize, c.y as usize)?;
        }
        Ok(Ship {
            kind: placement.kind(),
            orientation: placement.orientation(),
            anchor,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Whether the ship occupies the given cell.
    pub fn contains(&self, cell: Coord) -> bool {
        self.mask.get(cell.x as usize, cell.y as usize).unwrap_or(false)
    }

    /// Register a hit at `cell` if the ship occupies it.
    /// Returns `true` when the hit landed on this ship.
    pub fn register_hit(&mut self, cell: Coord) -> bool {
        if self.contains(cell) {
            let _ = self.hits.set(cell.x as usize, cell.y as usize);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.kind.length()
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the run.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// The cells the ship occupies, in run order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.mask.iter_cells().map(|(x, y)| Coord::new(x as u8, y as u8))
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, anchor: {}, orientation: {:?}, hits: {}/{} }}",
            self.kind,
            self.anchor,
            self.orientation,
            self.hits.count_ones(),
            self.kind.length(),
        )
    }
}
