#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::board::locations;
    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::cell::Cell;
    use crate::location::Location;
    use crate::placement::{Orientation, Placement};
    use crate::problem::Bimaru;
    use crate::puzzle::{ParsePuzzleError, Puzzle};
    use crate::search::{
        astar_tree_search, breadth_first_tree_search, depth_first_tree_search, greedy_tree_search,
        SearchProblem,
    };
    use crate::Board;

    fn board_with(rows: &[usize], cols: &[usize], hints: &[(Location, Cell)]) -> Board {
        let mut builder = BoardBuilder::with_size(NonZero::new(rows.len()).unwrap());
        builder.row_targets(rows).col_targets(cols);
        for (location, value) in hints {
            builder.add_hint(*location, *value);
        }
        builder.build().unwrap()
    }

    #[test]
    fn middle_hint_defers_until_a_neighbor_is_known() {
        let board = board_with(&[2; 10], &[2; 10], &[(Location(2, 2), Cell::Middle)]);

        assert!(!board.is_invalid());
        // diagonal exclusion fires immediately; the middle's axis stays ambiguous while all
        // four orthogonal neighbors are unknown
        assert_eq!(format!("{}", board), "??????????
?.?.??????
??m???????
?.?.??????
??????????
??????????
??????????
??????????
??????????
??????????
");
    }

    #[test]
    fn zero_target_lines_flood_with_water() {
        let board = board_with(&[0, 4, 4, 4, 4, 4, 0, 0, 0, 0], &[2; 10], &[]);

        assert!(!board.is_invalid());
        assert_eq!(format!("{}", board), "..........
??????????
??????????
??????????
??????????
??????????
..........
..........
..........
..........
");
    }

    #[test]
    fn boat_hint_in_a_zero_row_is_invalid() {
        let board = board_with(
            &[0, 4, 4, 4, 4, 4, 0, 0, 0, 0],
            &[2; 10],
            &[(Location(0, 5), Cell::Submarine)],
        );
        assert!(board.is_invalid());
    }

    #[test]
    fn top_against_water_is_invalid() {
        let board = board_with(
            &[2; 10],
            &[2; 10],
            &[(Location(0, 0), Cell::Top), (Location(1, 0), Cell::Water)],
        );
        assert!(board.is_invalid());
    }

    #[test]
    fn top_on_the_bottom_edge_is_invalid() {
        let board = board_with(&[2; 10], &[2; 10], &[(Location(9, 0), Cell::Top)]);
        assert!(board.is_invalid());
    }

    #[test]
    fn mismatched_target_sums_are_invalid() {
        let board = board_with(&[2; 10], &[2, 2, 2, 2, 2, 2, 2, 2, 2, 1], &[]);
        assert!(board.is_invalid());
    }

    #[test]
    fn submarine_hint_isolates_itself_and_leaves_the_fleet() {
        let board = board_with(&[2; 10], &[2; 10], &[(Location(4, 4), Cell::Submarine)]);

        assert_eq!(board.fleet, [3, 3, 2, 1]);
        assert_eq!(format!("{}", board), "??????????
??????????
??????????
???...????
???.c.????
???...????
??????????
??????????
??????????
??????????
");
    }

    #[test]
    fn directional_hint_extends_resolves_and_completes() {
        let board = board_with(&[2; 10], &[2; 10], &[(Location(5, 5), Cell::Left)]);

        // the left extreme forces a boat cell to its right; row saturation then pins that
        // cell's last neighbor, the cell resolves to a right extreme, and the completed
        // size-2 ship leaves the fleet
        assert!(!board.is_invalid());
        assert_eq!(board.fleet, [4, 2, 2, 1]);
        assert_eq!(format!("{}", board), "??????????
??????????
??????????
??????????
????....??
.....lr...
????....??
??????????
??????????
??????????
");
    }

    #[test]
    fn hinted_extremes_complete_through_an_open_middle() {
        let board = board_with(
            &[2, 3, 2, 3, 2, 2, 2, 2, 1, 1],
            &[2, 2, 3, 2, 2, 2, 2, 2, 2, 1],
            &[(Location(2, 2), Cell::Top), (Location(4, 2), Cell::Bottom)],
        );

        assert!(!board.is_invalid());
        assert_eq!(board.get(Location(3, 2)), Cell::Middle);
        assert_eq!(board.fleet, [4, 3, 1, 1]);
    }

    #[test]
    fn a_fifth_submarine_overdraws_the_fleet() {
        let hints = [0, 2, 4, 6, 8].map(|col| (Location(0, col), Cell::Submarine));
        let board = board_with(&[5, 5, 5, 5, 0, 0, 0, 0, 0, 0], &[2; 10], &hints);
        assert!(board.is_invalid());
    }

    #[test]
    fn hinted_complete_ship_is_never_placed_again() {
        let board = board_with(
            &[1, 1, 2, 2, 2, 2, 2, 2, 3, 3],
            &[2, 3, 2, 2, 2, 2, 2, 2, 2, 1],
            &[(Location(0, 0), Cell::Top), (Location(1, 0), Cell::Bottom)],
        );

        assert!(!board.is_invalid());
        assert_eq!(board.fleet, [4, 2, 2, 1]);
        let repeat = Placement { row: 0, col: 0, size: 2, orientation: Orientation::Vertical };
        assert!(!board.placements_for_size(2).contains(&repeat));
    }

    #[test]
    fn placing_a_size_three_ship_marks_and_isolates_it() {
        let targets = [2, 2, 2, 2, 2, 4, 2, 2, 1, 1];
        let board = board_with(&targets, &targets, &[]);

        let placed = board
            .place_ship(&Placement { row: 5, col: 5, size: 3, orientation: Orientation::Horizontal });

        assert!(!placed.is_invalid());
        assert_eq!(placed.fleet, [4, 3, 1, 1]);
        assert_eq!(placed.row_boats[5], 3);
        assert_eq!(placed.col_boats[5], 1);
        assert_eq!(format!("{}", placed), "??????????
??????????
??????????
??????????
????.....?
????.lmr.?
????.....?
??????????
??????????
??????????
");
    }

    #[test]
    fn water_cells_are_never_overwritten() {
        let targets = [2, 2, 2, 2, 2, 4, 2, 2, 1, 1];
        let board = board_with(&targets, &targets, &[(Location(5, 6), Cell::Water)]);

        // no enumerated placement may run through a water cell
        let crossing = Placement { row: 5, col: 4, size: 3, orientation: Orientation::Horizontal };
        assert!(!board.placement_fits(&crossing));
        assert!(board
            .placements_for_size(3)
            .iter()
            .all(|placement| placement.cells().all(|(location, _)| location != Location(5, 6))));

        let water_before = locations(board.size())
            .filter(|location| board.get(*location).is_water())
            .collect_vec();
        let placed = board
            .place_ship(&Placement { row: 5, col: 0, size: 3, orientation: Orientation::Horizontal });

        assert!(!placed.is_invalid());
        for location in water_before {
            assert_eq!(placed.get(location), Cell::Water);
        }
    }

    #[test]
    fn far_off_board_placement_is_rejected() {
        let board = board_with(&[2; 10], &[2; 10], &[]);
        let wild =
            Placement { row: 0, col: usize::MAX - 1, size: 2, orientation: Orientation::Horizontal };

        assert!(wild.cells().all(|(location, _)| !board.in_bounds(location)));
        assert!(!board.placement_fits(&wild));
    }

    #[test]
    fn propagation_is_idempotent_at_a_fixed_point() {
        let mut board = board_with(&[2; 10], &[2; 10], &[(Location(5, 5), Cell::Left)]);
        let before = (format!("{}", board), board.fleet, board.row_boats.clone());

        board.reduce();

        assert_eq!(format!("{}", board), before.0);
        assert_eq!(board.fleet, before.1);
        assert_eq!(board.row_boats, before.2);
    }

    const SOLVABLE_ROWS: [usize; 10] = [7, 0, 5, 1, 3, 1, 1, 1, 1, 0];
    const SOLVABLE_COLS: [usize; 10] = [5, 1, 3, 2, 1, 2, 2, 2, 0, 2];

    #[test]
    fn heuristic_counts_ships_and_decreases_across_a_transition() {
        let problem = Bimaru::new(board_with(&SOLVABLE_ROWS, &SOLVABLE_COLS, &[]));
        let initial = problem.initial_state();

        assert_eq!(problem.heuristic(&initial), 10);
        let actions = problem.actions(&initial);
        assert!(!actions.is_empty());
        // the largest remaining size is placed first, so every transition removes one ship
        assert!(actions.iter().all(|action| action.size == 4));
        let successor = problem.result(&initial, &actions[0]);
        assert_eq!(problem.heuristic(&successor), 9);
    }

    #[test]
    fn solves_a_full_puzzle() {
        let board = board_with(&SOLVABLE_ROWS, &SOLVABLE_COLS, &[]);

        let solved = board.solve().expect("puzzle has a solution");
        assert!(solved.is_complete());

        let rendered = format!("{}", solved);
        assert!(!rendered.contains('?') && !rendered.contains('x'));

        let grid = rendered.lines().map(|line| line.chars().collect_vec()).collect_vec();
        for (row, line) in grid.iter().enumerate() {
            assert_eq!(line.iter().filter(|glyph| **glyph != '.').count(), SOLVABLE_ROWS[row]);
        }
        for col in 0..10 {
            assert_eq!(
                grid.iter().filter(|line| line[col] != '.').count(),
                SOLVABLE_COLS[col]
            );
        }
        // ships never touch diagonally
        for row in 0..9 {
            for col in 0..10 {
                if grid[row][col] == '.' {
                    continue;
                }
                if col > 0 {
                    assert_eq!(grid[row + 1][col - 1], '.');
                }
                if col < 9 {
                    assert_eq!(grid[row + 1][col + 1], '.');
                }
            }
        }
    }

    #[test]
    fn builder_accumulates_invalid_reasons() {
        let mut builder = BoardBuilder::with_size(NonZero::new(10).unwrap());
        builder.add_hint(Location(10, 0), Cell::Water);
        assert_eq!(builder.build().unwrap_err(), &vec![BuilderInvalidReason::HintOutOfBounds]);

        let mut builder = BoardBuilder::with_size(NonZero::new(10).unwrap());
        builder.row_targets(&[1, 2, 3]);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::TargetCountMismatch]));

        let mut builder = BoardBuilder::with_size(NonZero::new(10).unwrap());
        builder.add_hint(Location(0, 0), Cell::BoatUnknown);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::UnhintableValue]));
    }

    #[test]
    fn parses_the_textual_puzzle_format() {
        let text = "ROW\t7\t0\t5\t1\t3\t1\t1\t1\t1\t0
COLUMN\t5\t1\t3\t2\t1\t2\t2\t2\t0\t2
2
HINT\t0\t0\tL
HINT\t4\t9\tT
";
        let puzzle: Puzzle = text.parse().unwrap();
        assert_eq!(puzzle.size(), 10);
        assert_eq!(puzzle.row_target, SOLVABLE_ROWS.to_vec());
        assert_eq!(puzzle.col_target, SOLVABLE_COLS.to_vec());
        assert_eq!(puzzle.hints.len(), 2);
        assert_eq!(puzzle.hints[0].location, Location(0, 0));
        assert_eq!(puzzle.hints[0].value, Cell::Left);

        let board = puzzle.into_board().unwrap();
        assert!(!board.is_invalid());
        assert_eq!(board.get(Location(0, 0)), Cell::Left);
        assert_eq!(board.get(Location(4, 9)), Cell::Top);
    }

    #[test]
    fn rejects_malformed_puzzle_text() {
        let unknown_glyph = "ROW\t1\nCOLUMN\t1\n1\nHINT\t0\t0\tz\n";
        assert_eq!(
            unknown_glyph.parse::<Puzzle>(),
            Err(ParsePuzzleError::UnknownGlyph('z'))
        );

        let mislabeled = "ROW\t1\nCOL\t1\n0\n";
        assert_eq!(
            mislabeled.parse::<Puzzle>(),
            Err(ParsePuzzleError::MissingSection("COLUMN"))
        );
    }

    // a toy problem keeping the drivers honest independently of boards
    struct CountTo(i32);

    impl SearchProblem for CountTo {
        type State = i32;
        type Action = i32;

        fn initial_state(&self) -> i32 {
            0
        }

        fn actions(&self, state: &i32) -> Vec<i32> {
            if *state < self.0 {
                vec![1, 2]
            } else {
                Vec::new()
            }
        }

        fn result(&self, state: &i32, action: &i32) -> i32 {
            state + action
        }

        fn is_goal(&self, state: &i32) -> bool {
            *state == self.0
        }

        fn heuristic(&self, state: &i32) -> usize {
            (self.0 - state).max(0) as usize
        }
    }

    #[test]
    fn every_driver_reaches_the_goal() {
        let problem = CountTo(3);
        assert_eq!(breadth_first_tree_search(&problem), Some(3));
        assert_eq!(depth_first_tree_search(&problem), Some(3));
        assert_eq!(greedy_tree_search(&problem), Some(3));
        assert_eq!(astar_tree_search(&problem), Some(3));
    }
}
