use crate::board::{locations, Board};
use crate::cell::Cell;
use crate::location::{Coord, Location};

/// The axis along which a ship is laid out. Size-1 ships have no meaningful orientation and
/// are enumerated once, as [`Horizontal`](Orientation::Horizontal).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Left-to-right, extremes [`Left`](Cell::Left) and [`Right`](Cell::Right).
    Horizontal,
    /// Top-to-bottom, extremes [`Top`](Cell::Top) and [`Bottom`](Cell::Bottom).
    Vertical,
}

impl Orientation {
    /// The piece played at offset `index` of a ship of the given size.
    fn role(&self, index: usize, size: usize) -> Cell {
        if size == 1 {
            return Cell::Submarine;
        }
        if index == 0 {
            match self {
                Self::Horizontal => Cell::Left,
                Self::Vertical => Cell::Top,
            }
        } else if index == size - 1 {
            match self {
                Self::Horizontal => Cell::Right,
                Self::Vertical => Cell::Bottom,
            }
        } else {
            Cell::Middle
        }
    }
}

/// A candidate ship placement, identified by its top/left cell: the action type of the search
/// problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    /// Row of the ship's top/left cell.
    pub row: Coord,
    /// Column of the ship's top/left cell.
    pub col: Coord,
    /// Ship length, 1 through 4.
    pub size: usize,
    /// Axis the ship extends along.
    pub orientation: Orientation,
}

impl Placement {
    /// The cells the ship would occupy, paired with the piece each would hold.
    ///
    /// Offsets wrap, so a placement anchored far off the board yields locations every
    /// bounds-checked read treats as off-board instead of overflowing.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        (0..self.size).map(move |index| {
            let location = match self.orientation {
                Orientation::Horizontal => Location(self.row, self.col.wrapping_add(index)),
                Orientation::Vertical => Location(self.row.wrapping_add(index), self.col),
            };
            (location, self.orientation.role(index, self.size))
        })
    }
}

impl Board {
    /// Whether the given placement is geometrically and numerically legal on this board: every
    /// path cell is open or already the exact piece required, every piece passes isolation, the
    /// ship is not already fully present, and no line counter would overshoot its target.
    pub(crate) fn placement_fits(&self, placement: &Placement) -> bool {
        let mut fully_present = true;
        for (location, role) in placement.cells() {
            if !self.in_bounds(location) {
                return false;
            }
            let current = self.get(location);
            if current.is_open() {
                fully_present = false;
            } else if current != role {
                return false;
            }
            if !self.piece_fits(location, role) {
                return false;
            }
        }
        // a ship every cell of which is already concrete was counted when it completed;
        // placing it again would double-count
        if fully_present {
            return false;
        }

        // only cells not yet known to be boats add to the line counters
        let added = |location: &Location| self.get(*location) == Cell::Unknown;
        match placement.orientation {
            Orientation::Horizontal => {
                let new_in_row =
                    placement.cells().filter(|(location, _)| added(location)).count();
                if self.row_boats[placement.row] + new_in_row > self.row_target[placement.row] {
                    return false;
                }
                placement
                    .cells()
                    .filter(|(location, _)| added(location))
                    .all(|(location, _)| self.col_boats[location.1] < self.col_target[location.1])
            }
            Orientation::Vertical => {
                let new_in_col =
                    placement.cells().filter(|(location, _)| added(location)).count();
                if self.col_boats[placement.col] + new_in_col > self.col_target[placement.col] {
                    return false;
                }
                placement
                    .cells()
                    .filter(|(location, _)| added(location))
                    .all(|(location, _)| self.row_boats[location.0] < self.row_target[location.0])
            }
        }
    }

    /// Every legal placement of a ship of the given size: horizontal sweeps over rows whose
    /// target admits the size, vertical sweeps over such columns. Size 1 is swept once over
    /// the whole grid.
    pub(crate) fn placements_for_size(&self, size: usize) -> Vec<Placement> {
        let mut out = Vec::new();

        if size == 1 {
            for Location(row, col) in locations(self.size) {
                if self.row_target[row] == 0 || self.col_target[col] == 0 {
                    continue;
                }
                let candidate = Placement { row, col, size, orientation: Orientation::Horizontal };
                if self.placement_fits(&candidate) {
                    out.push(candidate);
                }
            }
            return out;
        }

        for row in 0..self.size {
            if self.row_target[row] < size {
                continue;
            }
            for col in 0..=(self.size - size) {
                let candidate = Placement { row, col, size, orientation: Orientation::Horizontal };
                if self.placement_fits(&candidate) {
                    out.push(candidate);
                }
            }
        }
        for col in 0..self.size {
            if self.col_target[col] < size {
                continue;
            }
            for row in 0..=(self.size - size) {
                let candidate = Placement { row, col, size, orientation: Orientation::Vertical };
                if self.placement_fits(&candidate) {
                    out.push(candidate);
                }
            }
        }

        out
    }

    /// Returns the board resulting from committing the given placement: path cells take their
    /// pieces, the fleet gives up one ship of the size, and propagation closes the new
    /// deductions. `self` is never mutated.
    pub(crate) fn place_ship(&self, placement: &Placement) -> Self {
        let mut next = self.clone();
        for (location, role) in placement.cells() {
            next.set(location, role, true);
        }
        next.take_ship(placement.size);
        next.reduce();
        next
    }
}
