//! N-queens through both strategies.
//!
//! Actions are enumerated in ascending column order and both strategies
//! preserve that order, so each finds the lexicographically first solution.

use trailhead_harness::problems::n_queens::{NQueens, QueensBoard};
use trailhead_search::algorithm::SearchAlgorithm;
use trailhead_search::breadth_first::BreadthFirstSearch;
use trailhead_search::depth_first::DepthFirstSearch;
use trailhead_search::problem::Problem;

const FIRST_EIGHT: [usize; 8] = [0, 4, 7, 5, 2, 6, 1, 3];
const FIRST_FOUR: [usize; 4] = [1, 3, 0, 2];

fn assert_valid_solution(problem: &NQueens, board: &QueensBoard) {
    assert!(problem.is_goal(board));
    QueensBoard::new(board.dimension(), board.positions().to_vec(), true)
        .expect("solution must pass strict validation");
}

#[test]
fn depth_first_solves_eight_queens() {
    let problem = NQueens::default();
    let mut dfs = DepthFirstSearch::new();
    assert!(dfs.search(&problem).unwrap());

    let board = dfs.retrieve_result().unwrap();
    assert_valid_solution(&problem, board);
    assert_eq!(board.positions(), &FIRST_EIGHT);
}

#[test]
fn breadth_first_solves_eight_queens() {
    let problem = NQueens::default();
    let mut bfs = BreadthFirstSearch::new();
    assert!(bfs.search(&problem).unwrap());

    let board = bfs.retrieve_result().unwrap();
    assert_valid_solution(&problem, board);
    assert_eq!(board.positions(), &FIRST_EIGHT);
}

#[test]
fn depth_first_expands_fewer_nodes_than_breadth_first() {
    let problem = NQueens::default();
    let mut bfs = BreadthFirstSearch::new();
    let mut dfs = DepthFirstSearch::new();
    bfs.search(&problem).unwrap();
    dfs.search(&problem).unwrap();
    assert!(dfs.nodes_expanded() < bfs.nodes_expanded());
}

#[test]
fn four_queens_both_strategies() {
    let problem = NQueens::new(4);

    let mut bfs = BreadthFirstSearch::new();
    assert!(bfs.search(&problem).unwrap());
    assert_eq!(bfs.retrieve_result().unwrap().positions(), &FIRST_FOUR);

    let mut dfs = DepthFirstSearch::new();
    assert!(dfs.search(&problem).unwrap());
    assert_eq!(dfs.retrieve_result().unwrap().positions(), &FIRST_FOUR);
}

#[test]
fn unsolvable_sizes_exhaust_the_space() {
    for dimension in [2, 3] {
        let problem = NQueens::new(dimension);
        let mut bfs = BreadthFirstSearch::new();
        let mut dfs = DepthFirstSearch::new();
        assert!(!bfs.search(&problem).unwrap(), "{dimension}-queens has no solution");
        assert!(!dfs.search(&problem).unwrap());
        assert_eq!(bfs.nodes_expanded(), dfs.nodes_expanded());
    }
}

#[test]
fn zero_and_one_queen_boards_are_trivial() {
    let mut bfs = BreadthFirstSearch::new();
    assert!(bfs.search(&NQueens::new(0)).unwrap());
    assert_eq!(bfs.nodes_expanded(), 0, "empty board is already a goal");

    let mut dfs = DepthFirstSearch::new();
    assert!(dfs.search(&NQueens::new(1)).unwrap());
    assert_eq!(dfs.retrieve_result().unwrap().positions(), &[0]);
    assert_eq!(dfs.nodes_expanded(), 1);
}
