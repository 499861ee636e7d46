//! Candidate ship footprints and the ordered placement rule chain.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BB};
use crate::common::{Coord, PlacementError};
use crate::ship::{Orientation, ShipKind};

/// A candidate ship placement: kind, declared orientation and footprint.
///
/// `new` derives the footprint from an anchor; `from_cells` keeps a
/// caller-supplied footprint verbatim so malformed requests still travel
/// through the full rule chain instead of being rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    kind: ShipKind,
    orientation: Orientation,
    cells: Vec<Coord>,
}

impl Placement {
    /// Derive the straight run of `kind.length()` cells from `anchor`.
    pub fn new(kind: ShipKind, anchor: Coord, orientation: Orientation) -> Self {
        // saturating_add keeps an absurd anchor representable as an
        // out-of-bounds footprint rather than wrapping around.
        let cells = (0..kind.length())
            .map(|i| match orientation {
                Orientation::Horizontal => {
                    Coord::new(anchor.x.saturating_add(i as u8), anchor.y)
                }
                Orientation::Vertical => Coord::new(anchor.x, anchor.y.saturating_add(i as u8)),
            })
            .collect();
        Placement {
            kind,
            orientation,
            cells,
        }
    }

    /// Adopt an explicit footprint, e.g. one decoded from a request body.
    pub fn from_cells(kind: ShipKind, orientation: Orientation, cells: Vec<Coord>) -> Self {
        Placement {
            kind,
            orientation,
            cells,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the footprint, if any.
    pub fn anchor(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Check the candidate against `board`, reporting the first rule
    /// violated in the fixed order: type uniqueness, bounds, shape, overlap,
    /// adjacency. The ordering is part of the contract; the cheap checks run
    /// before the neighborhood scan.
    pub fn validate(&self, board: &Board) -> Result<(), PlacementError> {
        if board.has_ship(self.kind) {
            return Err(PlacementError::DuplicateShipType);
        }
        if self.cells.iter().any(|c| !c.in_bounds()) {
            return Err(PlacementError::OutOfBounds);
        }
        self.check_shape()?;
        let mask = footprint_mask(&self.cells);
        if mask.intersects(&board.ship_map()) {
            return Err(PlacementError::Overlap);
        }
        if mask.intersects(&board.halo()) {
            return Err(PlacementError::TooClose);
        }
        Ok(())
    }

    /// The footprint must be the exact run `anchor + i·step` for the declared
    /// orientation. Runs after the bounds rule, so cell arithmetic cannot
    /// overflow.
    fn check_shape(&self) -> Result<(), PlacementError> {
        if self.cells.len() != self.kind.length() {
            return Err(PlacementError::InvalidShape);
        }
        let first = self.cells[0];
        for (i, cell) in self.cells.iter().enumerate() {
            let expected = match self.orientation {
                Orientation::Horizontal => Coord::new(first.x + i as u8, first.y),
                Orientation::Vertical => Coord::new(first.x, first.y + i as u8),
            };
            if *cell != expected {
                return Err(PlacementError::InvalidShape);
            }
        }
        Ok(())
    }
}

/// Occupancy mask of the in-bounds footprint cells.
pub(crate) fn footprint_mask(cells: &[Coord]) -> BB {
    let mut mask = BB::new();
    for c in cells {
        if c.in_bounds() {
            let _ = mask.set(c.x as usize, c.y as usize);
        }
    }
    mask
}
