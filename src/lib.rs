//! Acceptor: a pure functional deterministic finite automaton library
//!
//! Acceptor follows the "pure core, imperative shell" philosophy: the
//! automaton definition and the simulation algorithm are pure functions
//! with no side effects, leaving any console or file handling to the
//! caller.
//!
//! # Core Concepts
//!
//! - **Definition**: an immutable, validated [`Dfa`] value (alphabet,
//!   transition table, start state, accepting states)
//! - **Simulation**: replaying an input string symbol-by-symbol with
//!   [`simulate`] or an incremental [`Run`]
//! - **Verdicts**: [`Accepted`](Verdict::Accepted),
//!   [`Rejected`](Verdict::Rejected), or
//!   [`Stuck`](Verdict::Stuck) - a run that hits an undefined transition
//!   is reported distinctly from a rejected one, never as an error
//!
//! # Example
//!
//! ```rust
//! use acceptor::{dfa, simulate, Verdict};
//!
//! // Accepts strings over {a, b} ending in 'a'.
//! let dfa = dfa! {
//!     states: 2,
//!     alphabet: ['a', 'b'],
//!     start: 0,
//!     accepting: [1],
//!     transitions: {
//!         (0, 'a') => 1,
//!         (0, 'b') => 0,
//!         (1, 'a') => 1,
//!         (1, 'b') => 0,
//!     },
//! }
//! .unwrap();
//!
//! let outcome = simulate(&dfa, "aab");
//! assert_eq!(outcome.verdict, Verdict::Rejected { state: 0 });
//! assert_eq!(outcome.trace.len(), 3);
//!
//! // A symbol outside the alphabet gets the run stuck, not rejected.
//! assert!(simulate(&dfa, "c").verdict.is_stuck());
//! ```

pub mod builder;
pub mod core;
pub mod sim;

// Re-export commonly used types
pub use crate::builder::{BuildError, DfaBuilder};
pub use crate::core::{DefinitionError, Dfa, StateId, Trace, TraceStep};
pub use crate::sim::{simulate, Run, RunOutcome, StepResult, Verdict};
