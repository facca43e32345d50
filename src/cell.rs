use strum::VariantArray;

use crate::step::Step;

/// The value space of a single board cell.
///
/// A cell starts [`Unknown`](Cell::Unknown) and is narrowed by hints, propagation, or ship
/// placement. Boat cells may be refined ([`BoatUnknown`](Cell::BoatUnknown) to a concrete piece)
/// but never rewritten; water is write-once.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Cell {
    /// Nothing is known about this cell yet.
    #[default]
    Unknown,
    /// The cell holds no ship segment.
    Water,
    /// The cell holds a ship segment whose piece type is not yet determined.
    BoatUnknown,
    /// The upper end of a vertical ship.
    Top,
    /// The lower end of a vertical ship.
    Bottom,
    /// The left end of a horizontal ship.
    Left,
    /// The right end of a horizontal ship.
    Right,
    /// An interior segment of a ship of size 3 or 4.
    Middle,
    /// A complete size-1 ship.
    Submarine,
}

impl Cell {
    /// Whether this cell is known to hold a ship segment, concretely typed or not.
    pub fn is_boat(&self) -> bool {
        !matches!(self, Self::Unknown | Self::Water)
    }

    /// Whether this cell is known to hold water.
    pub fn is_water(&self) -> bool {
        matches!(self, Self::Water)
    }

    /// Whether this cell may still be narrowed: either undetermined entirely, or a boat segment
    /// of undetermined piece type.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Unknown | Self::BoatUnknown)
    }

    /// The extreme piece capping the far end of a run started by `self`, for the four
    /// directional pieces.
    pub(crate) fn opposite(&self) -> Option<Self> {
        match self {
            Self::Top => Some(Self::Bottom),
            Self::Bottom => Some(Self::Top),
            Self::Left => Some(Self::Right),
            Self::Right => Some(Self::Left),
            _ => None,
        }
    }

    /// The direction in which a directional piece's ship continues.
    pub(crate) fn extends(&self) -> Option<Step> {
        match self {
            Self::Top => Some(Step::Down),
            Self::Bottom => Some(Step::Up),
            Self::Left => Some(Step::Right),
            Self::Right => Some(Step::Left),
            _ => None,
        }
    }

    /// All concrete piece types, i.e. everything a [`BoatUnknown`](Cell::BoatUnknown) cell may
    /// resolve to.
    pub(crate) fn concrete_pieces() -> impl Iterator<Item = Self> {
        Self::VARIANTS.iter().copied().filter(|cell| cell.is_boat() && !cell.is_open())
    }

    /// The external display glyph. Open cells render as placeholders and never appear in a
    /// solved board.
    pub(crate) fn glyph(&self) -> char {
        match self {
            Self::Unknown => '?',
            Self::Water => '.',
            Self::BoatUnknown => 'x',
            Self::Top => 't',
            Self::Bottom => 'b',
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Middle => 'm',
            Self::Submarine => 'c',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    /// Parses a hint letter as found in puzzle descriptions. Hints are always water or a
    /// concrete piece; there is no letter for an undetermined cell.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'w' | '.' => Ok(Self::Water),
            't' => Ok(Self::Top),
            'b' => Ok(Self::Bottom),
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            'm' => Ok(Self::Middle),
            'c' => Ok(Self::Submarine),
            other => Err(other),
        }
    }
}
