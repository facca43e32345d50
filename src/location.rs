use std::num::NonZero;

use ndarray::Ix;

/// One board coordinate.
pub type Coord = usize;
/// A board side length.
pub type Dimension = NonZero<Coord>;

/// A cell position on the board.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
// row, col
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Offsets this location by a signed `(row, col)` delta.
    ///
    /// Underflow wraps, producing a coordinate far outside any board; bounds-checked reads then
    /// treat the result as off-board, so edge neighborhoods need no special casing.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// The four diagonal neighbors, which may never hold a boat segment next to one.
    pub(crate) fn diagonals(self) -> [Self; 4] {
        [
            self.offset_by((-1, -1)),
            self.offset_by((-1, 1)),
            self.offset_by((1, -1)),
            self.offset_by((1, 1)),
        ]
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
