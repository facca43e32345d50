use itertools::Itertools;
use strum::VariantArray;

use crate::board::{locations, Board, LARGEST_SHIP};
use crate::cell::Cell;
use crate::location::Location;
use crate::step::Step;

impl Board {
    /// Closes every deduction the current cell values admit, running to a fixed point.
    ///
    /// Each pass first collects all deducible assignments into a worklist and only then applies
    /// them, so the outcome does not depend on scan order. Contradictions flip the `invalid`
    /// flag and stop the engine; propagation never fails any other way.
    pub(crate) fn reduce(&mut self) {
        while !self.invalid {
            let mut work: Vec<(Location, Cell)> = Vec::new();
            self.saturation_deductions(&mut work);
            self.piece_deductions(&mut work);
            if self.invalid {
                return;
            }

            let mut changed = false;
            for (location, value) in work {
                match self.get(location) {
                    Cell::Unknown => {
                        self.set(location, value, false);
                        changed = true;
                    }
                    // two rules deducing opposite kinds for one cell is a genuine conflict
                    current if current.is_water() != value.is_water() => {
                        self.invalid = true;
                        return;
                    }
                    _ => {}
                }
            }

            changed |= self.resolve_open_cells();
            if !changed {
                return;
            }
        }
    }

    /// Line saturation, both ways: when the remaining non-water cells are exactly the target,
    /// all of them hold boats; when the target is already met, everything still open is water.
    fn saturation_deductions(&self, work: &mut Vec<(Location, Cell)>) {
        for line in 0..self.size {
            let row_fill = if self.size - self.row_water[line] == self.row_target[line] {
                Some(Cell::BoatUnknown)
            } else if self.row_boats[line] == self.row_target[line] {
                Some(Cell::Water)
            } else {
                None
            };
            if let Some(value) = row_fill {
                work.extend(
                    (0..self.size)
                        .map(|col| Location(line, col))
                        .filter(|loc| self.get(*loc) == Cell::Unknown)
                        .map(|loc| (loc, value)),
                );
            }

            let col_fill = if self.size - self.col_water[line] == self.col_target[line] {
                Some(Cell::BoatUnknown)
            } else if self.col_boats[line] == self.col_target[line] {
                Some(Cell::Water)
            } else {
                None
            };
            if let Some(value) = col_fill {
                work.extend(
                    (0..self.size)
                        .map(|row| Location(row, line))
                        .filter(|loc| self.get(*loc) == Cell::Unknown)
                        .map(|loc| (loc, value)),
                );
            }
        }
    }

    /// Per-piece neighborhood rules for every boat cell: diagonal exclusion, directional
    /// extension, submarine isolation, and middle-axis inference.
    fn piece_deductions(&mut self, work: &mut Vec<(Location, Cell)>) {
        for loc in locations(self.size) {
            let value = self.get(loc);
            if !value.is_boat() {
                continue;
            }

            if !self.piece_fits(loc, value) {
                self.invalid = true;
                return;
            }

            // no two boat cells ever touch diagonally
            for diagonal in loc.diagonals() {
                self.deduce(work, diagonal, Cell::Water);
            }

            match value {
                Cell::Submarine => {
                    for step in Step::VARIANTS {
                        self.deduce(work, step.attempt_from(loc), Cell::Water);
                    }
                }
                Cell::Top | Cell::Bottom | Cell::Left | Cell::Right => {
                    let ahead = value.extends().unwrap();
                    self.deduce(work, ahead.attempt_from(loc), Cell::BoatUnknown);
                    self.deduce(work, ahead.invert().attempt_from(loc), Cell::Water);
                    for cross in ahead.crosswise() {
                        self.deduce(work, cross.attempt_from(loc), Cell::Water);
                    }
                }
                Cell::Middle => {
                    // the axis is inferable once any orthogonal neighbor is determined or
                    // off-board; with all four unknown the middle stays ambiguous for now
                    let boat_at =
                        |step: Step| self.get(step.attempt_from(loc)).is_boat();
                    let blocked = |step: Step| {
                        let next = step.attempt_from(loc);
                        !self.in_bounds(next) || self.get(next).is_water()
                    };
                    let axis = if boat_at(Step::Up)
                        || boat_at(Step::Down)
                        || blocked(Step::Left)
                        || blocked(Step::Right)
                    {
                        Some(Step::Down)
                    } else if boat_at(Step::Left)
                        || boat_at(Step::Right)
                        || blocked(Step::Up)
                        || blocked(Step::Down)
                    {
                        Some(Step::Right)
                    } else {
                        None
                    };
                    if let Some(ahead) = axis {
                        self.deduce(work, ahead.attempt_from(loc), Cell::BoatUnknown);
                        self.deduce(work, ahead.invert().attempt_from(loc), Cell::BoatUnknown);
                        for cross in ahead.crosswise() {
                            self.deduce(work, cross.attempt_from(loc), Cell::Water);
                        }
                    }
                }
                Cell::BoatUnknown => {}
                _ => unreachable!(),
            }
        }
    }

    fn deduce(&self, work: &mut Vec<(Location, Cell)>, location: Location, value: Cell) {
        if self.in_bounds(location) && self.get(location) == Cell::Unknown {
            work.push((location, value));
        }
    }

    /// Local consistency of a candidate piece with everything already known around it: no
    /// diagonal boat contact and orthogonal neighbors compatible with the claimed type.
    pub(crate) fn piece_fits(&self, loc: Location, piece: Cell) -> bool {
        if loc.diagonals().iter().any(|diagonal| self.get(*diagonal).is_boat()) {
            return false;
        }

        let extendable = |step: Step| {
            let next = step.attempt_from(loc);
            self.in_bounds(next) && !self.get(next).is_water()
        };
        let boat_at = |step: Step| self.get(step.attempt_from(loc)).is_boat();

        match piece {
            Cell::BoatUnknown => true,
            Cell::Submarine => Step::VARIANTS.iter().all(|step| !boat_at(*step)),
            Cell::Top | Cell::Bottom | Cell::Left | Cell::Right => {
                let ahead = piece.extends().unwrap();
                extendable(ahead)
                    && !boat_at(ahead.invert())
                    && ahead.crosswise().iter().all(|step| !boat_at(*step))
            }
            Cell::Middle => {
                let axis_fits = |ahead: Step| {
                    extendable(ahead)
                        && extendable(ahead.invert())
                        && ahead.crosswise().iter().all(|step| !boat_at(*step))
                };
                axis_fits(Step::Down) || axis_fits(Step::Right)
            }
            _ => unreachable!(),
        }
    }

    /// Resolves every [`BoatUnknown`](Cell::BoatUnknown) cell whose four orthogonal neighbors
    /// are determined (or off-board). Exhaustive isolation admits exactly one concrete piece
    /// for such a cell; zero or several is a contradiction.
    fn resolve_open_cells(&mut self) -> bool {
        let mut changed = false;
        for loc in locations(self.size) {
            if self.invalid {
                return changed;
            }
            if self.get(loc) != Cell::BoatUnknown {
                continue;
            }
            let surroundings_known = Step::VARIANTS.iter().all(|step| {
                let next = step.attempt_from(loc);
                !self.in_bounds(next) || self.get(next) != Cell::Unknown
            });
            if !surroundings_known {
                continue;
            }

            let fits = Cell::concrete_pieces()
                .filter(|piece| self.piece_fits(loc, *piece))
                .collect_vec();
            match fits.as_slice() {
                [piece] => {
                    // already counted as a boat cell when it first became BoatUnknown
                    self.set(loc, *piece, true);
                    self.note_completion(loc);
                    changed = true;
                }
                _ => self.invalid = true,
            }
        }
        changed
    }

    /// Checks whether the ship run through `loc` is now fully capped, and if so takes it out
    /// of the fleet. A run longer than the largest ship is a contradiction.
    pub(crate) fn note_completion(&mut self, loc: Location) {
        let run = match self.get(loc) {
            Cell::Submarine => {
                self.take_ship(1);
                return;
            }
            Cell::Top => Some((Step::Down, loc)),
            Cell::Left => Some((Step::Right, loc)),
            Cell::Bottom => self.run_start(loc, Step::Up).map(|start| (Step::Down, start)),
            Cell::Right => self.run_start(loc, Step::Left).map(|start| (Step::Right, start)),
            // a middle's run can only be capped once a concrete extreme governs it; try both
            // axes, at most one can yield a start
            Cell::Middle => self
                .run_start(loc, Step::Up)
                .map(|start| (Step::Down, start))
                .or_else(|| self.run_start(loc, Step::Left).map(|start| (Step::Right, start))),
            _ => return,
        };
        let Some((ahead, start)) = run else {
            return;
        };

        let end_piece = self.get(start).opposite().unwrap();
        let mut length = 1;
        let mut cursor = start;
        loop {
            cursor = ahead.attempt_from(cursor);
            match self.get(cursor) {
                Cell::Middle => {
                    length += 1;
                    if length >= LARGEST_SHIP {
                        // an extreme plus this many middles cannot cap within the size limit
                        self.invalid = true;
                        return;
                    }
                }
                piece if piece == end_piece => {
                    self.take_ship(length + 1);
                    return;
                }
                _ => return,
            }
        }
    }

    /// Walks backward over contiguous middles to the extreme governing `loc`'s run, if that
    /// extreme is already concrete.
    fn run_start(&self, loc: Location, back: Step) -> Option<Location> {
        let start_piece = match back {
            Step::Up => Cell::Top,
            Step::Left => Cell::Left,
            _ => unreachable!(),
        };
        let mut cursor = loc;
        loop {
            let previous = back.attempt_from(cursor);
            match self.get(previous) {
                Cell::Middle => cursor = previous,
                piece if piece == start_piece => return Some(previous),
                _ => return None,
            }
        }
    }
}
