use strum::VariantArray;

use crate::location::Location;

/// An orthogonal step between cells on the board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Toward lower row indices.
    Up,
    /// Toward higher row indices.
    Down,
    /// Toward lower column indices.
    Left,
    /// Toward higher column indices.
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self` and return the
    /// resultant [`Location`], possibly off-board.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The two directions perpendicular to `self`.
    pub(crate) fn crosswise(&self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }
}
