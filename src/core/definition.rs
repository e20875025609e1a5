//! The immutable DFA definition.
//!
//! A [`Dfa`] is a plain value: an alphabet, a transition table, a start
//! state, and a set of accepting states. It is validated once at
//! construction and never mutated afterwards, so it can be shared freely
//! across any number of simulation runs (or threads) without
//! synchronization.

use super::error::{DefinitionError, StateRole};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a DFA state.
///
/// States are indices into the transition table, always in
/// `[0, num_states)`. They are never allocated as separate objects; the
/// table row *is* the state.
pub type StateId = usize;

/// A validated deterministic finite automaton.
///
/// The transition function is stored per source state as a map from symbol
/// to successor. The function may be partial: a missing entry is a legal
/// part of the definition and shows up at simulation time as a stuck run,
/// not as a construction error.
///
/// # Example
///
/// ```rust
/// use acceptor::core::Dfa;
/// use std::collections::BTreeMap;
///
/// // Accepts strings over {a, b} ending in 'a'.
/// let rows = vec![
///     BTreeMap::from([('a', 1), ('b', 0)]),
///     BTreeMap::from([('a', 1), ('b', 0)]),
/// ];
/// let dfa = Dfa::new(['a', 'b'], 2, rows, 0, [1]).unwrap();
///
/// assert_eq!(dfa.lookup(0, 'a'), Some(1));
/// assert_eq!(dfa.lookup(0, 'x'), None);
/// assert!(dfa.is_accepting(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dfa {
    alphabet: BTreeSet<char>,
    num_states: usize,
    /// One row per state; row index is the source [`StateId`].
    transitions: Vec<BTreeMap<char, StateId>>,
    start: StateId,
    accepting: BTreeSet<StateId>,
}

impl Dfa {
    /// Construct a DFA from already-collected parts, validating every
    /// invariant.
    ///
    /// `transitions` holds one row per source state, indexed by
    /// [`StateId`]. Fewer rows than `num_states` is fine (the missing rows
    /// are empty, i.e. fully undefined); a non-empty row indexed at or
    /// past `num_states` is an out-of-range source state.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::ZeroStates`] if `num_states == 0`
    /// - [`DefinitionError::EmptyAlphabet`] if `alphabet` yields nothing
    /// - [`DefinitionError::OutOfRangeState`] if the start state, any
    ///   accepting state, any transition source row, or any transition
    ///   target falls outside `[0, num_states)`. The error names the role,
    ///   the offending index, and the bound.
    ///
    /// Duplicate accepting states collapse; order is irrelevant.
    pub fn new<A, F>(
        alphabet: A,
        num_states: usize,
        transitions: Vec<BTreeMap<char, StateId>>,
        start: StateId,
        accepting: F,
    ) -> Result<Self, DefinitionError>
    where
        A: IntoIterator<Item = char>,
        F: IntoIterator<Item = StateId>,
    {
        if num_states == 0 {
            return Err(DefinitionError::ZeroStates);
        }

        let alphabet: BTreeSet<char> = alphabet.into_iter().collect();
        if alphabet.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }

        let out_of_range = |role: StateRole, index: StateId| DefinitionError::OutOfRangeState {
            role,
            index,
            bound: num_states,
        };

        if start >= num_states {
            return Err(out_of_range(StateRole::Start, start));
        }

        let accepting: BTreeSet<StateId> = accepting.into_iter().collect();
        if let Some(&bad) = accepting.iter().find(|&&s| s >= num_states) {
            return Err(out_of_range(StateRole::Accepting, bad));
        }

        for (source, row) in transitions.iter().enumerate() {
            if source >= num_states && !row.is_empty() {
                return Err(out_of_range(StateRole::TransitionSource, source));
            }
            if let Some(&bad) = row.values().find(|&&t| t >= num_states) {
                return Err(out_of_range(StateRole::TransitionTarget, bad));
            }
        }

        // Normalize so every state owns exactly one row: pad short
        // tables, trim trailing (necessarily empty) rows.
        let mut transitions = transitions;
        transitions.resize_with(num_states, BTreeMap::new);

        Ok(Self {
            alphabet,
            num_states,
            transitions,
            start,
            accepting,
        })
    }

    /// Look up the successor for a `(state, symbol)` pair.
    ///
    /// Pure. Returns `None` when the pair has no entry — the undefined
    /// transition of a partial table, or a symbol outside the alphabet
    /// (the table has no entry for those by construction). An out-of-range
    /// `state` also yields `None`; a [`crate::sim::Run`] can never produce
    /// one, since every stored target is validated.
    pub fn lookup(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(state)?.get(&symbol).copied()
    }

    /// Check whether `state` is an accepting state. Pure.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The state every run starts in.
    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// Number of states; valid [`StateId`]s are `0..num_states()`.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// The accepting-state set.
    pub fn accepting_states(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }
}
