//! Tests for run scanning and the four structural checks

#[cfg(test)]
mod tests {
    use crosspattern::algorithm::validation::{
        Constraints, Rejection, black_count, has_isolated_singleton, has_overlong_run,
        is_fully_connected, white_runs,
    };
    use crosspattern::spatial::{Cell, Grid};

    const VALID_13: [&str; 13] = [
        "....#...#....",
        "....#........",
        "......#......",
        ".........#...",
        "#####........",
        ".......#.....",
        ".....###.....",
        ".....#.......",
        "........#####",
        "...#.........",
        "......#......",
        "........#....",
        "....#...#....",
    ];

    fn grid_from_preview(lines: &[&str]) -> Grid {
        let rows: Vec<Vec<&str>> = lines
            .iter()
            .map(|line| line.chars().map(|c| if c == '#' { "#" } else { "" }).collect())
            .collect();
        Grid::from_rows(&rows).expect("preview should parse")
    }

    // Tests run lengths are split at black cells and grid edges
    // Verified by not emitting the run closed by the grid edge
    #[test]
    fn test_white_runs_split_on_black() {
        use Cell::{Black as B, White as W};
        let lane = [W, W, B, W, B, B, W, W, W];
        assert_eq!(white_runs(&lane).collect::<Vec<_>>(), vec![2, 1, 3]);

        let all_black = [B, B, B];
        assert_eq!(white_runs(&all_black).count(), 0);
    }

    // Tests a one-cell gap in a row is flagged
    // Verified by only scanning columns
    #[test]
    fn test_singleton_in_row() {
        let grid = grid_from_preview(&["#.#..", ".....", ".....", ".....", "....."]);
        assert!(has_isolated_singleton(&grid));
    }

    // Tests a one-cell gap in a column is flagged
    // Verified by only scanning rows
    #[test]
    fn test_singleton_in_column() {
        let grid = grid_from_preview(&["#....", ".....", "#....", ".....", "....."]);
        assert!(has_isolated_singleton(&grid));
    }

    // Tests a singleton at the grid edge is flagged
    // Verified by ignoring the run closed by the edge
    #[test]
    fn test_singleton_at_edge() {
        let grid = grid_from_preview(&["...#.", ".....", ".....", ".....", "....."]);
        assert!(has_isolated_singleton(&grid));
    }

    // Tests runs of two or more cells are not singletons
    // Verified by flagging runs shorter than three
    #[test]
    fn test_two_cell_runs_pass() {
        let grid = grid_from_preview(&["..#..", ".....", "#...#", ".....", "..#.."]);
        assert!(!has_isolated_singleton(&grid));
    }

    // Tests overlong runs are detected against the configured bound
    // Verified by using >= instead of >
    #[test]
    fn test_overlong_run_bound() {
        let grid = Grid::new(5);
        assert!(has_overlong_run(&grid, 4));
        assert!(!has_overlong_run(&grid, 5));
    }

    // Tests an overlong column run is detected
    // Verified by only scanning rows
    #[test]
    fn test_overlong_run_in_column() {
        let grid = grid_from_preview(&["..#.."; 5]);
        assert!(has_overlong_run(&grid, 4));
        assert!(!has_overlong_run(&grid, 5));
    }

    // Tests a split white region is reported disconnected
    // Verified by comparing against the visited count of the wrong region
    #[test]
    fn test_disconnected_regions() {
        let grid = grid_from_preview(&["..#..", "..#..", "..#..", "..#..", "..#.."]);
        assert!(!is_fully_connected(&grid));
    }

    // Tests a grid without white cells is trivially connected
    // Verified by returning false on an empty traversal
    #[test]
    fn test_all_black_grid_is_connected() {
        let grid = grid_from_preview(&["###", "###", "###"]);
        assert!(is_fully_connected(&grid));

        let constraints = Constraints {
            black_target: 9,
            max_run: 3,
        };
        assert_eq!(constraints.check(&grid), Ok(()));
    }

    // Tests the reference grid passes all checks
    // Verified by counting white cells instead of black
    #[test]
    fn test_reference_grid_is_valid() {
        let grid = grid_from_preview(&VALID_13);
        assert_eq!(black_count(&grid), 25);
        assert!(grid.is_point_symmetric());
        assert_eq!(grid.get([6, 6]), Some(Cell::Black));
        assert!(!has_isolated_singleton(&grid));
        assert!(!has_overlong_run(&grid, 10));
        assert!(is_fully_connected(&grid));
    }

    // Tests validation leaves no state behind between calls
    // Verified by caching the first verdict inside the constraints
    #[test]
    fn test_validation_is_repeatable() {
        let grid = grid_from_preview(&VALID_13);
        let constraints = Constraints {
            black_target: 25,
            max_run: 10,
        };
        for _ in 0..3 {
            assert!(constraints.is_valid(&grid));
        }

        let strict = Constraints {
            black_target: 25,
            max_run: 8,
        };
        assert_eq!(strict.check(&grid), Err(Rejection::OverlongRun));
        assert!(constraints.is_valid(&grid));
    }

    // Tests the black count check is reported before later checks
    // Verified by running the singleton check first
    #[test]
    fn test_check_reports_first_failure() {
        let grid = grid_from_preview(&["#.#..", ".....", ".....", ".....", "....."]);
        let constraints = Constraints {
            black_target: 3,
            max_run: 5,
        };
        assert_eq!(
            constraints.check(&grid),
            Err(Rejection::BlackCount {
                found: 2,
                expected: 3
            })
        );

        let matching = Constraints {
            black_target: 2,
            max_run: 5,
        };
        assert_eq!(matching.check(&grid), Err(Rejection::IsolatedSingleton));
    }

    // Tests rejection messages name the failing check
    // Verified by omitting the counts from the message
    #[test]
    fn test_rejection_display() {
        let message = Rejection::BlackCount {
            found: 23,
            expected: 25,
        }
        .to_string();
        assert!(message.contains("23"));
        assert!(message.contains("25"));
        assert!(Rejection::Disconnected.to_string().contains("connected"));
    }
}
