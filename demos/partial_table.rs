//! Partial transition tables
//!
//! This example demonstrates that an incomplete table is a valid
//! definition: inputs the table cannot trace come back as a Stuck
//! verdict, distinct from Rejected, instead of an error.
//!
//! Key concepts:
//! - Omitting entries to detect "not in this language" fast
//! - The incremental Run API for feeding symbols one at a time
//!
//! Run with: cargo run --example partial_table

use acceptor::sim::{Run, StepResult};
use acceptor::{dfa, simulate};

fn main() {
    println!("=== Partial transition tables ===\n");

    // Accepts "ab" exactly; everything else falls off the table.
    let dfa = dfa! {
        states: 3,
        alphabet: ['a', 'b'],
        start: 0,
        accepting: [2],
        transitions: {
            (0, 'a') => 1,
            (1, 'b') => 2,
        },
    }
    .unwrap();

    for input in ["ab", "aa", "ba", "abb"] {
        println!("{input:?}: {}", simulate(&dfa, input).verdict);
    }

    // The same simulation, fed one symbol at a time.
    println!("\nIncremental run over \"ax\":");
    let mut run = Run::new(&dfa);
    for symbol in "ax".chars() {
        match run.step(symbol) {
            StepResult::Advanced(state) => println!("  '{symbol}' -> state {state}"),
            StepResult::Stuck { symbol, state, .. } => {
                println!("  '{symbol}' has no entry in state {state}");
            }
        }
    }
    println!("  {}", run.finish().verdict);

    println!("\n=== Example Complete ===");
}
