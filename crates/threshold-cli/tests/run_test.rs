//! Integration tests for the assembled checker.

use std::sync::Arc;

use threshold_checker::application::checker::run_once;
use threshold_checker::domain::outcome::Outcome;
use threshold_cli::build_checker;
use threshold_cli::rng::SystemRng;
use threshold_test_support::{FixedRng, RecordingReporter};

#[tokio::test]
async fn test_fixed_21_takes_success_branch() {
    let reporter = Arc::new(RecordingReporter::new());
    let checker = build_checker(FixedRng(21), reporter.clone()).unwrap();

    let outcome = run_once(&checker).await.unwrap();

    assert_eq!(outcome, Outcome::AboveThreshold);
    assert_eq!(reporter.lines(), vec!["21", "Number is greater than 20"]);
}

#[tokio::test]
async fn test_fixed_20_takes_failure_branch() {
    let reporter = Arc::new(RecordingReporter::new());
    let checker = build_checker(FixedRng(20), reporter.clone()).unwrap();

    let outcome = run_once(&checker).await.unwrap();

    assert_eq!(outcome, Outcome::AtOrBelowThreshold);
    assert_eq!(reporter.lines(), vec!["20", "Number is less than 20"]);
}

#[tokio::test]
async fn test_random_runs_emit_two_consistent_lines_each() {
    let reporter = Arc::new(RecordingReporter::new());
    let checker = build_checker(SystemRng::seeded(2026), reporter.clone()).unwrap();

    let runs = 500;
    let mut outcomes = Vec::with_capacity(runs);
    for _ in 0..runs {
        outcomes.push(run_once(&checker).await.unwrap());
    }

    let lines = reporter.lines();
    assert_eq!(lines.len(), runs * 2);

    for (pair, outcome) in lines.chunks(2).zip(outcomes) {
        let n: u32 = pair[0].parse().unwrap();
        assert!(n < 100, "draw {n} out of range");
        if n > 20 {
            assert_eq!(outcome, Outcome::AboveThreshold);
            assert_eq!(pair[1], "Number is greater than 20");
        } else {
            assert_eq!(outcome, Outcome::AtOrBelowThreshold);
            assert_eq!(pair[1], "Number is less than 20");
        }
    }
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let first = Arc::new(RecordingReporter::new());
    let second = Arc::new(RecordingReporter::new());
    let a = build_checker(SystemRng::seeded(99), first.clone()).unwrap();
    let b = build_checker(SystemRng::seeded(99), second.clone()).unwrap();

    for _ in 0..10 {
        run_once(&a).await.unwrap();
        run_once(&b).await.unwrap();
    }

    assert_eq!(first.lines(), second.lines());
}
