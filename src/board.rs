use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::cell::Cell;
use crate::location::{Dimension, Location};

/// Boat cells on a complete board: 4·1 + 3·2 + 2·3 + 1·4.
pub(crate) const TOTAL_BOAT_CELLS: usize = 20;
/// Ships of each size (index `size - 1`) making up the full fleet.
pub(crate) const FULL_FLEET: [usize; 4] = [4, 3, 2, 1];
/// No ship is longer than this.
pub(crate) const LARGEST_SHIP: usize = 4;

/// Every location on a board of side length `size`, row-major.
pub(crate) fn locations(size: usize) -> impl Iterator<Item = Location> {
    (0..size).cartesian_product(0..size).map(Location::from)
}

/// A Bimaru board: the grid of deduced cell values together with the per-line targets, the
/// running per-line counters, and the inventory of ships not yet accounted for.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder) or parsed
/// from the textual format via [`Puzzle`](crate::puzzle::Puzzle). A board exposed to the search
/// is never mutated again; every transition copies it.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) size: usize,
    pub(crate) row_target: Vec<usize>,
    pub(crate) col_target: Vec<usize>,
    pub(crate) row_boats: Vec<usize>,
    pub(crate) row_water: Vec<usize>,
    pub(crate) col_boats: Vec<usize>,
    pub(crate) col_water: Vec<usize>,
    // ships of each size (index size - 1) not yet placed or completed
    pub(crate) fleet: [usize; 4],
    // sticky; an invalid board can never reach a solution
    pub(crate) invalid: bool,
}

impl Board {
    /// Assembles a board from hint cells and per-line targets, closes all immediate deductions,
    /// and flags self-evident contradictions. Called by the builder.
    pub(crate) fn from_parts(
        size: Dimension,
        cells: Array2<Cell>,
        row_target: Vec<usize>,
        col_target: Vec<usize>,
    ) -> Self {
        let n = size.get();
        let mut board = Self {
            cells,
            size: n,
            row_target,
            col_target,
            row_boats: vec![0; n],
            row_water: vec![0; n],
            col_boats: vec![0; n],
            col_water: vec![0; n],
            fleet: FULL_FLEET,
            invalid: false,
        };

        let row_sum: usize = board.row_target.iter().sum();
        let col_sum: usize = board.col_target.iter().sum();
        if row_sum != TOTAL_BOAT_CELLS || col_sum != row_sum {
            // the fleet occupies exactly 20 cells; targets asking for anything else can never
            // be satisfied
            board.invalid = true;
            return board;
        }

        for loc in locations(n) {
            match board.get(loc) {
                Cell::Water => board.count_water(loc),
                value if value.is_boat() => board.count_boat(loc),
                _ => {}
            }
            if board.invalid {
                return board;
            }
        }

        // hints must be mutually consistent before any deduction runs
        for loc in locations(n) {
            let value = board.get(loc);
            if value.is_boat() && !board.piece_fits(loc, value) {
                board.invalid = true;
                return board;
            }
        }

        // ships fully given by hints come out of the fleet up front; counting from the
        // top/left extreme only visits each run once
        for loc in locations(n) {
            if matches!(board.get(loc), Cell::Submarine | Cell::Top | Cell::Left) {
                board.note_completion(loc);
            }
            if board.invalid {
                return board;
            }
        }

        board.reduce();
        board
    }

    /// The board's side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this board has contradicted a constraint and can never become a solution.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Whether this board is a solution: valid, fleet fully accounted for, every line exactly
    /// at its target, and no cell left undetermined.
    pub fn is_complete(&self) -> bool {
        !self.invalid
            && self.fleet.iter().all(|&count| count == 0)
            && (0..self.size).all(|line| {
                self.row_boats[line] == self.row_target[line]
                    && self.col_boats[line] == self.col_target[line]
            })
            && self.cells.iter().all(|cell| !cell.is_open())
    }

    /// The value at the given position, or [`Cell::Unknown`] for positions off the board, so
    /// neighborhood rules at the edges behave as "nothing there".
    pub fn get(&self, location: Location) -> Cell {
        self.cells.get(location.as_index()).copied().unwrap_or_default()
    }

    pub(crate) fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.size && location.1 < self.size
    }

    /// Guarded write: only an [`Unknown`](Cell::Unknown) cell may be determined, and only a
    /// [`BoatUnknown`](Cell::BoatUnknown) cell may be refined to a concrete piece (with
    /// `refine` set). Counters are updated exactly once per logical cell, on first
    /// determination; refinement leaves them untouched. Anything else is a no-op.
    pub(crate) fn set(&mut self, location: Location, value: Cell, refine: bool) {
        if self.invalid || !self.in_bounds(location) {
            return;
        }
        match self.get(location) {
            Cell::Unknown => {
                self.cells.index_mut(location.as_index()).assign_elem(value);
                if value.is_water() {
                    self.count_water(location);
                } else if value.is_boat() {
                    self.count_boat(location);
                }
            }
            Cell::BoatUnknown if refine && value.is_boat() && !value.is_open() => {
                self.cells.index_mut(location.as_index()).assign_elem(value);
            }
            _ => {}
        }
    }

    fn count_boat(&mut self, location: Location) {
        let Location(row, col) = location;
        self.row_boats[row] += 1;
        self.col_boats[col] += 1;
        if self.row_boats[row] > self.row_target[row] || self.col_boats[col] > self.col_target[col]
        {
            self.invalid = true;
        }
    }

    fn count_water(&mut self, location: Location) {
        let Location(row, col) = location;
        self.row_water[row] += 1;
        self.col_water[col] += 1;
        // a line with too much water can no longer reach its target
        if self.size - self.row_water[row] < self.row_target[row]
            || self.size - self.col_water[col] < self.col_target[col]
        {
            self.invalid = true;
        }
    }

    /// Removes one ship of the given size from the remaining inventory; taking a size the
    /// fleet has run out of is a contradiction.
    pub(crate) fn take_ship(&mut self, size: usize) {
        if self.invalid {
            return;
        }
        if self.fleet[size - 1] == 0 {
            self.invalid = true;
        } else {
            self.fleet[size - 1] -= 1;
        }
    }

    /// Total ships not yet placed or completed, every size counted.
    pub(crate) fn ships_remaining(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// The largest ship size still in the inventory, if any.
    pub(crate) fn largest_remaining_ship(&self) -> Option<usize> {
        self.fleet.iter().rposition(|&count| count > 0).map(|index| index + 1)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.size * (self.size + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(cell.glyph());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
