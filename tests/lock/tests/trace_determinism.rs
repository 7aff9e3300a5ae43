//! Trace determinism: identical runs must produce byte-identical canonical
//! traces, in-process and across processes.

use std::process::Command;

use lock_tests::fixtures::{multi_path, single_path, unreachable_goal};
use trailhead_harness::problems::n_queens::NQueens;
use trailhead_harness::runner::{run_search, StrategyKind};
use trailhead_search::algorithm::SearchAlgorithm;
use trailhead_search::breadth_first::BreadthFirstSearch;
use trailhead_search::depth_first::DepthFirstSearch;
use trailhead_search::trace::{DiscoveryOutcome, TerminationReason, TraceEvent};

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn trace_bytes_identical_across_n10_runs() {
    let problem = NQueens::new(6);
    let mut first_bytes = None;
    for _ in 0..10 {
        let mut dfs = DepthFirstSearch::with_trace();
        dfs.search(&problem).unwrap();
        let bytes = dfs.trace().unwrap().to_canonical_json_bytes().unwrap();
        match &first_bytes {
            None => first_bytes = Some(bytes),
            Some(first) => assert_eq!(first, &bytes, "trace bytes differ across runs"),
        }
    }
}

#[test]
fn strategies_produce_distinct_digests() {
    let problem = single_path();
    let bfs = run_search(&problem, StrategyKind::BreadthFirst).unwrap();
    let dfs = run_search(&problem, StrategyKind::DepthFirst).unwrap();
    assert_ne!(bfs.trace_digest, dfs.trace_digest);
}

#[test]
fn trace_events_mirror_counters() {
    let problem = unreachable_goal();
    let mut bfs = BreadthFirstSearch::with_trace();
    bfs.search(&problem).unwrap();

    let trace = bfs.trace().unwrap();
    let retrieved = trace
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::Retrieved { .. }))
        .count() as u64;
    assert_eq!(retrieved, bfs.nodes_retrieved());

    let discovered = trace.discovered_transitions().len();
    assert_eq!(discovered, problem.discovered_transitions().len());

    let summary = trace.summary().unwrap();
    assert_eq!(summary.termination, TerminationReason::FrontierExhausted);
    assert_eq!(summary.counters, *bfs.counters());
}

#[test]
fn goal_event_is_last_discovery() {
    let problem = multi_path();
    let mut dfs = DepthFirstSearch::with_trace();
    dfs.search(&problem).unwrap();

    let last = dfs.trace().unwrap().events().last().cloned().unwrap();
    assert_eq!(
        last,
        TraceEvent::Discovered {
            from: "GraphState(3)".into(),
            action: "8".into(),
            to: "GraphState(8)".into(),
            outcome: DiscoveryOutcome::GoalReached,
        }
    );
}

#[test]
fn canonical_json_parses_back_with_summary() {
    let problem = NQueens::new(4);
    let mut bfs = BreadthFirstSearch::with_trace();
    assert!(bfs.search(&problem).unwrap());

    let bytes = bfs.trace().unwrap().to_canonical_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["strategy"], "breadth_first");
    assert_eq!(parsed["summary"]["termination"], "goal_reached");
    assert_eq!(
        parsed["summary"]["nodes_expanded"],
        serde_json::json!(bfs.nodes_expanded())
    );
    // Re-serializing the parsed value reproduces the canonical bytes.
    assert_eq!(serde_json::to_vec(&parsed).unwrap(), bytes);
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

fn run_fixture(args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");
    let mut command = Command::new(bin);
    command.args(args).env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} {args:?}: {e}"));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_output_matches_inproc_report() {
    let stdout = run_fixture(&["single_path", "bfs"], &[]);
    let report = run_search(&single_path(), StrategyKind::BreadthFirst).unwrap();

    let mut expected = vec!["fixture=single_path".to_string()];
    expected.extend(report.to_lines());
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn crossproc_output_independent_of_log_level() {
    for args in [["queens:6", "dfs"], ["unreachable_goal", "bfs"]] {
        let baseline = run_fixture(&args, &[]);
        let verbose = run_fixture(&args, &[("RUST_LOG", "trace")]);
        assert_eq!(baseline, verbose, "stdout must not depend on RUST_LOG");
        assert!(baseline.contains("trace_digest=sha256:"));
    }
}

#[test]
fn crossproc_rejects_unknown_strategy() {
    let output = Command::new(env!("CARGO_BIN_EXE_search_fixture"))
        .args(["single_path", "astar"])
        .output()
        .expect("spawn search_fixture");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
