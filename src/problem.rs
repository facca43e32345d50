use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::board::Board;
use crate::placement::Placement;
use crate::search::{depth_first_tree_search, SearchProblem};

// ids only break ties in informed searches' open lists; they carry no meaning
static NEXT_STATE_ID: AtomicU64 = AtomicU64::new(0);

/// A search node payload: one board plus a unique, monotonically increasing identifier.
///
/// Each state exclusively owns its board; transitions copy, so sibling states never alias a
/// grid. States order by identifier alone.
#[derive(Debug)]
pub struct State {
    board: Board,
    id: u64,
}

impl State {
    pub(crate) fn new(board: Board) -> Self {
        Self { board, id: NEXT_STATE_ID.fetch_add(1, AtomicOrdering::Relaxed) }
    }

    /// The board this state wraps.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unwraps the state into its board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// The Bimaru puzzle formulated as a search problem: states are boards, actions are placements
/// of the largest ship size still in the fleet, and the goal is a complete board.
pub struct Bimaru {
    initial: Board,
}

impl Bimaru {
    /// Wraps a propagated initial board for the search drivers.
    pub fn new(board: Board) -> Self {
        Self { initial: board }
    }
}

impl SearchProblem for Bimaru {
    type State = State;
    type Action = Placement;

    fn initial_state(&self) -> State {
        State::new(self.initial.clone())
    }

    fn actions(&self, state: &State) -> Vec<Placement> {
        let board = state.board();
        if board.is_invalid() {
            return Vec::new();
        }
        match board.largest_remaining_ship() {
            Some(size) => board.placements_for_size(size),
            None => Vec::new(),
        }
    }

    fn result(&self, state: &State, action: &Placement) -> State {
        State::new(state.board().place_ship(action))
    }

    fn is_goal(&self, state: &State) -> bool {
        state.board().is_complete()
    }

    /// Ships still to place: an admissible lower bound on remaining transitions, zero exactly
    /// at goal states.
    fn heuristic(&self, state: &State) -> usize {
        state.board().ships_remaining()
    }
}

impl Board {
    /// Solves this board, consuming `self` and returning a completed version of `self`, or
    /// [`None`] if the search space holds no solution.
    pub fn solve(self) -> Option<Self> {
        depth_first_tree_search(&Bimaru::new(self)).map(State::into_board)
    }
}
