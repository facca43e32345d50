//! Generic tree-search drivers.
//!
//! The drivers know nothing about boards; they consume the five-operation contract of
//! [`SearchProblem`] and differ only in how the frontier is ordered. All of them expand the
//! search tree without a closed set, which is sound here because transitions only ever add
//! ships: no state is reachable twice along one path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// The contract a problem exposes to the drivers: states, actions, transition, goal test and
/// heuristic. Nothing else crosses this boundary.
pub trait SearchProblem {
    /// The search node payload. Ordering is only used to break ties in informed searches'
    /// open lists.
    type State: Ord;
    /// One applicable transition out of a state.
    type Action;

    /// A fresh copy of the starting state.
    fn initial_state(&self) -> Self::State;
    /// All actions applicable in `state`; empty for dead ends and solved states.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    /// Whether `state` is a solution.
    fn is_goal(&self, state: &Self::State) -> bool;
    /// A lower bound on the transitions still needed from `state`.
    fn heuristic(&self, state: &Self::State) -> usize;
}

/// Expands shallowest states first.
pub fn breadth_first_tree_search<P: SearchProblem>(problem: &P) -> Option<P::State> {
    let mut frontier = VecDeque::from([problem.initial_state()]);
    while let Some(state) = frontier.pop_front() {
        if problem.is_goal(&state) {
            return Some(state);
        }
        for action in problem.actions(&state) {
            frontier.push_back(problem.result(&state, &action));
        }
    }
    None
}

/// Expands deepest states first. The usual choice here: invalid boards prune entire branches,
/// so diving beats sweeping.
pub fn depth_first_tree_search<P: SearchProblem>(problem: &P) -> Option<P::State> {
    let mut frontier = vec![problem.initial_state()];
    while let Some(state) = frontier.pop() {
        if problem.is_goal(&state) {
            return Some(state);
        }
        for action in problem.actions(&state) {
            frontier.push(problem.result(&state, &action));
        }
    }
    None
}

/// Expands the state with the lowest heuristic first.
pub fn greedy_tree_search<P: SearchProblem>(problem: &P) -> Option<P::State> {
    let initial = problem.initial_state();
    let mut frontier = BinaryHeap::from([Reverse((problem.heuristic(&initial), initial))]);
    while let Some(Reverse((_, state))) = frontier.pop() {
        if problem.is_goal(&state) {
            return Some(state);
        }
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action);
            frontier.push(Reverse((problem.heuristic(&next), next)));
        }
    }
    None
}

/// Expands the state with the lowest depth-plus-heuristic first; optimal in transition count
/// whenever the heuristic is admissible.
pub fn astar_tree_search<P: SearchProblem>(problem: &P) -> Option<P::State> {
    let initial = problem.initial_state();
    let mut frontier = BinaryHeap::from([Reverse((problem.heuristic(&initial), 0, initial))]);
    while let Some(Reverse((_, depth, state))) = frontier.pop() {
        if problem.is_goal(&state) {
            return Some(state);
        }
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action);
            let estimate = depth + 1 + problem.heuristic(&next);
            frontier.push(Reverse((estimate, depth + 1, next)));
        }
    }
    None
}
