//! Recognizing strings that end in 'a'
//!
//! This example demonstrates defining a two-state DFA and simulating a
//! handful of input strings against it.
//!
//! Key concepts:
//! - Declarative definition with the `dfa!` macro
//! - One immutable definition, many independent runs
//! - Reading the trace alongside the verdict
//!
//! Run with: cargo run --example recognize_ends_in_a

use acceptor::{dfa, simulate};

fn main() {
    println!("=== Recognizing strings ending in 'a' ===\n");

    let dfa = dfa! {
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
    .unwrap();

    for input in ["a", "aab", "baba", "", "abc"] {
        let outcome = simulate(&dfa, input);

        print!("{input:?}: state {}", dfa.start_state());
        for step in outcome.trace.steps() {
            print!(" -> ({}) -> state {}", step.symbol, step.state);
        }
        println!();
        println!("  {}", outcome.verdict);
    }

    println!("\n=== Example Complete ===");
}
