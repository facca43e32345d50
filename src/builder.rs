//! Fallible, chainable construction of [`Board`]s from per-line targets and hints.

use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::Cell;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
///
/// These are misuses of the builder itself; a well-formed description of an unsolvable or
/// contradictory puzzle still builds, yielding a board whose
/// [`is_invalid`](Board::is_invalid) flag is set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A hint was placed outside the bounds specified by `size` on the builder.
    HintOutOfBounds,
    /// A target vector's length does not match the board's side length.
    TargetCountMismatch,
    /// A hint carried a value that cannot appear in a puzzle description; hints are always
    /// water or a concrete piece, never an undetermined cell.
    UnhintableValue,
}

/// A builder for Bimaru boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some
/// point. [`build`](Self::build) runs the initial propagation, so the returned board already
/// carries every deduction its hints admit.
#[derive(Clone)]
pub struct BoardBuilder {
    size: Dimension,
    row_target: Vec<usize>,
    col_target: Vec<usize>,
    hints: Vec<(Location, Cell)>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_size(NonZero::new(10).unwrap())
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] for a square board with the specified side length.
    pub fn with_size(size: Dimension) -> Self {
        Self {
            size,
            row_target: vec![0; size.get()],
            col_target: vec![0; size.get()],
            hints: Vec::new(),
            invalid_reasons: Vec::new(),
        }
    }

    /// Set the required boat-cell count of every row, top to bottom.
    ///
    /// May cause the builder to enter a
    /// [`TargetCountMismatch`](BuilderInvalidReason::TargetCountMismatch) invalid state if the
    /// slice length is not the board's side length.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn row_targets(&mut self, targets: &[usize]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }
        if targets.len() != self.size.get() {
            self.invalid_reasons.push(BuilderInvalidReason::TargetCountMismatch);
            return self;
        }
        self.row_target = targets.to_vec();
        self
    }

    /// Set the required boat-cell count of every column, left to right.
    ///
    /// Same conditions as [`row_targets`](Self::row_targets).
    pub fn col_targets(&mut self, targets: &[usize]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }
        if targets.len() != self.size.get() {
            self.invalid_reasons.push(BuilderInvalidReason::TargetCountMismatch);
            return self;
        }
        self.col_target = targets.to_vec();
        self
    }

    /// Pre-fill one cell. Later hints for the same cell win, matching how puzzle files are
    /// read.
    ///
    /// May cause the builder to enter a
    /// [`HintOutOfBounds`](BuilderInvalidReason::HintOutOfBounds) or
    /// [`UnhintableValue`](BuilderInvalidReason::UnhintableValue) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_hint(&mut self, location: Location, value: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }
        if location.0 >= self.size.get() || location.1 >= self.size.get() {
            self.invalid_reasons.push(BuilderInvalidReason::HintOutOfBounds);
            return self;
        }
        if value.is_open() {
            self.invalid_reasons.push(BuilderInvalidReason::UnhintableValue);
            return self;
        }
        self.hints.push((location, value));
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`], running the initial propagation.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let n = self.size.get();
        let mut cells = Array2::from_shape_simple_fn((n, n), Cell::default);
        for (location, value) in &self.hints {
            cells.index_mut(location.as_index()).assign_elem(*value);
        }

        Ok(Board::from_parts(
            self.size,
            cells,
            self.row_target.clone(),
            self.col_target.clone(),
        ))
    }
}
