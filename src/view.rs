//! Wire-facing board views.
//!
//! A view is a flat, row-major (y, then x) sequence of 100 cell tags. The
//! transport layer serializes it verbatim; opponent views never contain
//! `Ship` (information hiding is applied when the view is built, not by the
//! serializer).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// Per-cell tag of a board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No shot here; no ship visible to this viewer.
    Empty,
    /// Intact ship segment (owner views only).
    Ship,
    /// Resolved shot that struck a ship.
    Hit,
    /// Resolved shot on open water.
    Miss,
}

impl Cell {
    /// Numeric wire code for transports that ship cells as integers.
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Ship => 1,
            Cell::Hit => 2,
            Cell::Miss => 3,
        }
    }

    pub fn from_u8(value: u8) -> Cell {
        match value {
            1 => Cell::Ship,
            2 => Cell::Hit,
            3 => Cell::Miss,
            _ => Cell::Empty,
        }
    }
}

/// One side's snapshot of a board: 100 tags, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardView {
    cells: Vec<Cell>,
}

impl BoardView {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        BoardView { cells }
    }

    /// The flat cell sequence, row-major (y, then x).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Tag at (x, y); `Empty` off-grid.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Cell::Empty;
        }
        let idx = y as usize * BOARD_SIZE as usize + x as usize;
        self.cells.get(idx).copied().unwrap_or(Cell::Empty)
    }

    /// Numeric wire codes in view order.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.to_u8()).collect()
    }
}

impl fmt::Display for BoardView {
    /// Grid rendering with lettered columns and numbered rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = BOARD_SIZE as usize;
        write!(f, "   ")?;
        for x in 0..n {
            write!(f, " {}", (b'A' + x as u8) as char)?;
        }
        writeln!(f)?;
        for y in 0..n {
            write!(f, "{:2} ", y + 1)?;
            for x in 0..n {
                let ch = match self.cells.get(y * n + x).copied().unwrap_or(Cell::Empty) {
                    Cell::Empty => '·',
                    Cell::Ship => '■',
                    Cell::Hit => 'X',
                    Cell::Miss => '○',
                };
                write!(f, " {}", ch)?;
            }
            if y + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
