//! End-to-end simulation scenarios.

use acceptor::core::{Dfa, TraceStep};
use acceptor::sim::simulate;
use acceptor::{dfa, Verdict};

/// States {0, 1} over {a, b}; accepts strings ending in 'a'.
fn ends_in_a() -> Dfa {
    dfa! {
        states: 2,
        alphabet: ['a', 'b'],
        start: 0,
        accepting: [1],
        transitions: {
            (0, 'a') => 1,
            (0, 'b') => 0,
            (1, 'a') => 1,
            (1, 'b') => 0,
        },
    }
    .unwrap()
}

/// Same automaton with (1, 'b') intentionally omitted.
fn ends_in_a_partial() -> Dfa {
    dfa! {
        states: 2,
        alphabet: ['a', 'b'],
        start: 0,
        accepting: [1],
        transitions: {
            (0, 'a') => 1,
            (0, 'b') => 0,
            (1, 'a') => 1,
        },
    }
    .unwrap()
}

#[test]
fn aab_is_rejected_with_full_trace() {
    let outcome = simulate(&ends_in_a(), "aab");

    assert_eq!(
        outcome.trace.steps(),
        [
            TraceStep { symbol: 'a', state: 1 },
            TraceStep { symbol: 'a', state: 1 },
            TraceStep { symbol: 'b', state: 0 },
        ]
    );
    assert_eq!(outcome.verdict, Verdict::Rejected { state: 0 });
}

#[test]
fn single_a_is_accepted() {
    let outcome = simulate(&ends_in_a(), "a");

    assert_eq!(
        outcome.trace.steps(),
        [TraceStep { symbol: 'a', state: 1 }]
    );
    assert_eq!(outcome.verdict, Verdict::Accepted { state: 1 });
}

#[test]
fn out_of_alphabet_symbol_sticks_immediately() {
    let outcome = simulate(&ends_in_a(), "c");

    assert!(outcome.trace.is_empty());
    assert_eq!(
        outcome.verdict,
        Verdict::Stuck {
            symbol: 'c',
            state: 0,
            position: 0,
        }
    );
}

#[test]
fn partial_table_sticks_instead_of_rejecting() {
    let outcome = simulate(&ends_in_a_partial(), "ab");

    // The consumed prefix is traced; the verdict is Stuck, not Rejected.
    assert_eq!(
        outcome.trace.steps(),
        [TraceStep { symbol: 'a', state: 1 }]
    );
    assert_eq!(
        outcome.verdict,
        Verdict::Stuck {
            symbol: 'b',
            state: 1,
            position: 1,
        }
    );
}

#[test]
fn verdicts_render_report_lines() {
    let dfa = ends_in_a();

    assert_eq!(
        simulate(&dfa, "ba").verdict.to_string(),
        "accepted (ended in state 1)"
    );
    assert_eq!(
        simulate(&dfa, "ab").verdict.to_string(),
        "rejected (ended in state 0)"
    );
    assert_eq!(
        simulate(&dfa, "acb").verdict.to_string(),
        "stuck on 'c' at position 1 in state 1 (undefined transition)"
    );
}

#[test]
fn definition_is_shareable_across_threads() {
    let dfa = ends_in_a();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| simulate(&dfa, "abba").verdict))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Verdict::Accepted { state: 1 });
        }
    });
}

#[test]
fn outcome_round_trips_through_json() {
    let outcome = simulate(&ends_in_a_partial(), "ab");
    let json = serde_json::to_string(&outcome).unwrap();
    let deserialized: acceptor::RunOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, deserialized);
}
