//! The textual puzzle description format.
//!
//! A description is tab-separated:
//!
//! ```text
//! ROW <count-0> ... <count-N>
//! COLUMN <count-0> ... <count-N>
//! <hint total>
//! HINT <row> <column> <letter>
//! ```
//!
//! with hint letters `T`/`B`/`L`/`R`/`M` for directional and middle pieces, `C` for a
//! submarine and `W` for water, case-insensitive.

use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use crate::board::Board;
use crate::builder::{BoardBuilder, BuilderInvalidReason};
use crate::cell::Cell;
use crate::location::{Coord, Location};

/// One pre-filled cell of a puzzle description.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The cell the hint determines.
    pub location: Location,
    /// The value given for it, water or a concrete piece.
    pub value: Cell,
}

/// A parsed puzzle description: per-line targets plus sparse hints.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Puzzle {
    /// Required boat-cell count per row, top to bottom.
    pub row_target: Vec<usize>,
    /// Required boat-cell count per column, left to right.
    pub col_target: Vec<usize>,
    /// The pre-filled cells.
    pub hints: Vec<Hint>,
}

impl Puzzle {
    /// The board's side length, implied by the number of row targets.
    pub fn size(&self) -> usize {
        self.row_target.len()
    }

    /// Feeds this description through a [`BoardBuilder`], yielding the propagated initial
    /// board.
    pub fn into_board(self) -> Result<Board, Vec<BuilderInvalidReason>> {
        let Some(size) = NonZero::new(self.size()) else {
            return Err(vec![BuilderInvalidReason::TargetCountMismatch]);
        };
        let mut builder = BoardBuilder::with_size(size);
        builder.row_targets(&self.row_target).col_targets(&self.col_target);
        for hint in &self.hints {
            builder.add_hint(hint.location, hint.value);
        }
        builder.build().map_err(|reasons| reasons.clone())
    }
}

/// Reasons a puzzle description fails to parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsePuzzleError {
    /// A required section is missing or mislabeled.
    MissingSection(&'static str),
    /// A count field did not parse as a number.
    BadCount(String),
    /// A `HINT` line is malformed.
    BadHint(String),
    /// A hint letter names no cell value.
    UnknownGlyph(char),
}

impl Display for ParsePuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(section) => write!(f, "missing or mislabeled {} section", section),
            Self::BadCount(field) => write!(f, "unparseable count {:?}", field),
            Self::BadHint(line) => write!(f, "malformed hint line {:?}", line),
            Self::UnknownGlyph(glyph) => write!(f, "unknown hint letter {:?}", glyph),
        }
    }
}

impl std::error::Error for ParsePuzzleError {}

fn parse_counts(line: &str, tag: &'static str) -> Result<Vec<usize>, ParsePuzzleError> {
    let mut fields = line.split('\t');
    if fields.next() != Some(tag) {
        return Err(ParsePuzzleError::MissingSection(tag));
    }
    fields
        .map(|field| {
            field.trim().parse().map_err(|_| ParsePuzzleError::BadCount(field.to_string()))
        })
        .collect()
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let row_target = parse_counts(
            lines.next().ok_or(ParsePuzzleError::MissingSection("ROW"))?,
            "ROW",
        )?;
        let col_target = parse_counts(
            lines.next().ok_or(ParsePuzzleError::MissingSection("COLUMN"))?,
            "COLUMN",
        )?;

        let total_line = lines.next().ok_or(ParsePuzzleError::MissingSection("hint total"))?;
        let total: usize = total_line
            .trim()
            .parse()
            .map_err(|_| ParsePuzzleError::BadCount(total_line.to_string()))?;

        let mut hints = Vec::with_capacity(total);
        for _ in 0..total {
            let line = lines.next().ok_or(ParsePuzzleError::MissingSection("HINT"))?;
            let bad = || ParsePuzzleError::BadHint(line.to_string());
            let mut fields = line.split('\t');
            if fields.next() != Some("HINT") {
                return Err(bad());
            }
            let row: Coord = fields.next().ok_or_else(bad)?.trim().parse().map_err(|_| bad())?;
            let col: Coord = fields.next().ok_or_else(bad)?.trim().parse().map_err(|_| bad())?;
            let glyph = fields.next().ok_or_else(bad)?.trim().chars().next().ok_or_else(bad)?;
            let value = Cell::try_from(glyph).map_err(ParsePuzzleError::UnknownGlyph)?;
            hints.push(Hint { location: Location(row, col), value });
        }

        Ok(Self { row_target, col_target, hints })
    }
}
