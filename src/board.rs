//! One player's board: placed fleet, shot history and views.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{Coord, GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::placement::Placement;
use crate::ship::{Orientation, Ship, ShipKind};
use crate::view::{BoardView, Cell};

/// Mask type shared by boards, ships and the placement validator.
pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Ship occupancy and shot history for a single player.
///
/// Invariant: `ship_map` is exactly the union of the placed ships' masks.
/// A hit on a `ship_map` cell that no ship owns aborts with `UnknownShipHit`.
pub struct Board {
    ships: [Option<Ship<u128, { BOARD_SIZE as usize }>>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board (no ships placed, no shots taken).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Whether a ship of `kind` is already placed.
    pub fn has_ship(&self, kind: ShipKind) -> bool {
        self.ships[kind.index()].is_some()
    }

    /// The placed ship of `kind`, if any.
    pub fn ship(&self, kind: ShipKind) -> Option<&Ship<u128, { BOARD_SIZE as usize }>> {
        self.ships[kind.index()].as_ref()
    }

    /// Iterator over the placed ships.
    pub fn ships(&self) -> impl Iterator<Item = &Ship<u128, { BOARD_SIZE as usize }>> {
        self.ships.iter().flatten()
    }

    /// True when all five ship kinds are placed.
    pub fn fleet_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// The no-go zone for new placements: every ship cell plus its
    /// 8-neighborhood.
    pub(crate) fn halo(&self) -> BB {
        self.ship_map.dilated()
    }

    /// Validate and apply a placement.
    pub fn place(&mut self, placement: &Placement) -> Result<(), GameError> {
        placement.validate(self)?;
        let ship = Ship::from_placement(placement)?;
        self.ship_map |= ship.mask();
        self.ships[placement.kind().index()] = Some(ship);
        Ok(())
    }

    /// Resolve a shot at `target`, marking the cell and reporting the
    /// outcome. A cell resolves exactly once; re-targeting is rejected with
    /// `AlreadyTargeted` and mutates nothing.
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotOutcome, GameError> {
        if !target.in_bounds() {
            return Err(GameError::OutOfBounds);
        }
        let (x, y) = (target.x as usize, target.y as usize);
        if self.hits.get(x, y)? || self.misses.get(x, y)? {
            return Err(GameError::AlreadyTargeted);
        }
        if self.ship_map.get(x, y)? {
            self.hits.set(x, y)?;
            for ship in self.ships.iter_mut().flatten() {
                if ship.register_hit(target) {
                    if ship.is_sunk() {
                        return Ok(ShotOutcome::Sunk(ship.kind()));
                    }
                    return Ok(ShotOutcome::Hit);
                }
            }
            // ship_map diverged from the ship set
            Err(GameError::UnknownShipHit)
        } else {
            self.misses.set(x, y)?;
            Ok(ShotOutcome::Miss)
        }
    }

    /// True iff the full fleet is placed and every ship is sunk. A board
    /// with fewer than five ships is never fully sunk, so a win cannot be
    /// declared before placement completes.
    pub fn all_sunk(&self) -> bool {
        self.fleet_complete() && self.ships().all(Ship::is_sunk)
    }

    /// Snapshot of the board for one side of the table.
    ///
    /// The owner sees ship positions plus all shot outcomes; anyone else
    /// sees shot outcomes only, with unrevealed ship cells rendered empty.
    pub fn view_for(&self, owner: bool) -> BoardView {
        let n = BOARD_SIZE as usize;
        let mut cells = Vec::with_capacity(n * n);
        for y in 0..n {
            for x in 0..n {
                let cell = if self.hits.get(x, y).unwrap_or(false) {
                    Cell::Hit
                } else if self.misses.get(x, y).unwrap_or(false) {
                    Cell::Miss
                } else if owner && self.ship_map.get(x, y).unwrap_or(false) {
                    Cell::Ship
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }
        BoardView::new(cells)
    }

    /// Returns a random legal placement for `kind` on the current board.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Placement, GameError> {
        let len = kind.length() as u8;
        let mut attempts = 0;
        while attempts < 128 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - len, BOARD_SIZE - 1),
                Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - len),
            };
            let anchor = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let candidate = Placement::new(kind, anchor, orientation);
            if candidate.validate(self).is_ok() {
                return Ok(candidate);
            }
        }
        Err(GameError::UnableToPlace)
    }

    /// Generate a full legal fleet from scratch. Retries whole fleets when
    /// the no-touch rule paints a partial layout into a corner.
    pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Placement>, GameError> {
        let mut fleet_attempts = 0;
        'fleet: loop {
            fleet_attempts += 1;
            let mut board = Board::new();
            let mut placements = Vec::with_capacity(NUM_SHIPS);
            for kind in ShipKind::ALL {
                match board.random_placement(rng, kind) {
                    Ok(p) => {
                        board.place(&p)?;
                        placements.push(p);
                    }
                    Err(GameError::UnableToPlace) if fleet_attempts < 32 => continue 'fleet,
                    Err(e) => return Err(e),
                }
            }
            return Ok(placements);
        }
    }

    /// True when the cell has already been resolved to hit or miss.
    pub fn was_targeted(&self, cell: Coord) -> bool {
        if !cell.in_bounds() {
            return false;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        self.hits.get(x, y).unwrap_or(false) || self.misses.get(x, y).unwrap_or(false)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
