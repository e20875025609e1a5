//! Core DFA types and logic.
//!
//! This module contains the pure functional core of the automaton:
//! - The immutable [`Dfa`] definition and its construction invariants
//! - Construction errors ([`DefinitionError`])
//! - Immutable [`Trace`] values recording what a run consumed
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod definition;
mod error;
mod trace;

pub use definition::{Dfa, StateId};
pub use error::{DefinitionError, StateRole};
pub use trace::{Trace, TraceStep};
