//! Breadth-first lock tests: exact retrieval counts and discovered-transition
//! order on the shared tree fixtures.

use lock_tests::fixtures::{initial_is_goal, multi_path, single_path, unreachable_goal};
use trailhead_harness::problems::transition_graph::GraphState;
use trailhead_search::algorithm::SearchAlgorithm;
use trailhead_search::breadth_first::BreadthFirstSearch;
use trailhead_search::problem::Problem;

#[test]
fn single_path_to_goal() {
    let problem = single_path();
    let mut bfs = BreadthFirstSearch::new();
    let success = bfs.search(&problem).unwrap();

    assert!(success);
    assert!(problem.is_goal(bfs.retrieve_result().unwrap()));
    assert_eq!(bfs.nodes_retrieved(), 3);
    assert_eq!(
        problem.discovered_transitions(),
        vec![(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (3, 7), (3, 8)]
    );
}

#[test]
fn no_path_to_goal() {
    let problem = unreachable_goal();
    let mut bfs = BreadthFirstSearch::new();
    let success = bfs.search(&problem).unwrap();

    assert!(!success);
    assert!(bfs.retrieve_result().is_none());
    assert_eq!(bfs.nodes_retrieved(), 14);
    assert_eq!(bfs.nodes_expanded(), 14, "every reachable state expanded once");
    assert_eq!(
        problem.discovered_transitions(),
        vec![
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 5),
            (2, 6),
            (3, 7),
            (3, 8),
            (4, 9),
            (4, 10),
            (5, 11),
            (5, 12),
            (6, 13),
            (6, 14)
        ]
    );
}

#[test]
fn multiple_paths_take_the_shallowest() {
    let problem = multi_path();
    let mut bfs = BreadthFirstSearch::new();
    let success = bfs.search(&problem).unwrap();

    assert!(success);
    assert_eq!(bfs.retrieve_result(), Some(&GraphState(8)));
    assert_eq!(bfs.nodes_retrieved(), 3);
    assert_eq!(
        problem.discovered_transitions(),
        vec![(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (3, 7), (3, 8)]
    );
}

#[test]
fn initial_state_is_goal() {
    let problem = initial_is_goal();
    let mut bfs = BreadthFirstSearch::new();
    let success = bfs.search(&problem).unwrap();

    assert!(success);
    assert_eq!(bfs.retrieve_result(), Some(&problem.initial_state()));
    assert_eq!(bfs.nodes_retrieved(), 0);
    assert_eq!(bfs.nodes_evaluated(), 0);
    assert_eq!(bfs.nodes_expanded(), 0);
    assert!(problem.discovered_transitions().is_empty());
}

#[test]
fn counters_advance_in_lockstep() {
    for problem in [single_path(), unreachable_goal(), multi_path()] {
        let mut bfs = BreadthFirstSearch::new();
        bfs.search(&problem).unwrap();
        assert_eq!(bfs.nodes_retrieved(), bfs.nodes_evaluated());
        assert_eq!(bfs.nodes_evaluated(), bfs.nodes_expanded());
    }
}
