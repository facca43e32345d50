#![warn(missing_docs)]

//! # `bimaru`
//!
//! A solver for [Bimaru](https://en.wikipedia.org/wiki/Battleship_(puzzle)) (Battleship
//! Solitaire) puzzles: place a fleet of one size-4 ship, two size-3, three size-2 and four
//! size-1 ships on a square grid so that ships never touch, not even diagonally, every row and
//! column holds exactly its target number of boat cells, and all pre-given hint cells are
//! respected.
//!
//! Begin by building a board with a [`BoardBuilder`], or parse the tab-separated textual
//! format through [`Puzzle`](puzzle::Puzzle). Then call [`solve()`](Board::solve), consuming
//! the board and yielding a completed version of the board, printable through its
//! [`Display`](std::fmt::Display) implementation.
//!
//! # Internals
//!
//! This crate is driven by constraint propagation interleaved with tree search. Building a
//! board closes every immediate deduction: water saturation of rows and columns, isolation
//! around known pieces, and resolution of boat cells whose piece type becomes forced. The
//! search then places one ship at a time, largest first; each placement is propagated again,
//! and boards that contradict a constraint are pruned wholesale. The generic drivers in
//! [`search`] consume boards only through the [`SearchProblem`](search::SearchProblem)
//! contract, so any of them can run the same problem.

pub use board::Board;
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use cell::Cell;
pub use location::{Coord, Dimension, Location};
pub use placement::{Orientation, Placement};
pub use problem::{Bimaru, State};
pub use step::Step;

pub(crate) mod board;
mod tests;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod placement;
pub(crate) mod problem;
pub(crate) mod propagate;
pub mod puzzle;
pub mod search;
pub(crate) mod step;
