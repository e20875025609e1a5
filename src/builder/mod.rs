//! Builder API for ergonomic DFA construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! assembling definitions with minimal boilerplate. Validation itself
//! lives in [`Dfa::new`]; the builder only collects parts and delegates.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{DefinitionError, Dfa, StateId, StateRole};
use std::collections::{BTreeMap, BTreeSet};

/// Fluent builder for [`Dfa`] definitions.
///
/// Symbols named in [`transition`](Self::transition) calls join the
/// alphabet automatically, so [`alphabet`](Self::alphabet) is only needed
/// for symbols the table never mentions.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::DfaBuilder;
///
/// // Accepts strings of a's of even length.
/// let dfa = DfaBuilder::new()
///     .states(2)
///     .transition(0, 'a', 1)
///     .transition(1, 'a', 0)
///     .start(0)
///     .accepting(0)
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.alphabet().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    num_states: usize,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<StateId, BTreeMap<char, StateId>>,
    start: Option<StateId>,
    accepting: BTreeSet<StateId>,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of states (required). Valid states are `0..n`.
    pub fn states(mut self, n: usize) -> Self {
        self.num_states = n;
        self
    }

    /// Add one symbol to the alphabet.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.insert(symbol);
        self
    }

    /// Add symbols to the alphabet.
    pub fn alphabet<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Assign `(from, on) -> to`. Re-assigning the same pair keeps the
    /// last target. `on` joins the alphabet.
    pub fn transition(mut self, from: StateId, on: char, to: StateId) -> Self {
        self.alphabet.insert(on);
        self.transitions.entry(from).or_default().insert(on, to);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: StateId) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark one state as accepting.
    pub fn accepting(mut self, state: StateId) -> Self {
        self.accepting.insert(state);
        self
    }

    /// Mark several states as accepting. Duplicates collapse.
    pub fn accepting_states<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Build the definition.
    ///
    /// Fails with [`BuildError::MissingStartState`] if `.start` was never
    /// called, and with the underlying
    /// [`DefinitionError`](crate::core::DefinitionError) for any violated
    /// definition invariant, including transition rows addressed to
    /// states outside `0..states`.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        // Reject out-of-range source keys before laying the table out
        // densely; sizing the table from the keys would let one huge key
        // inflate the allocation (or overflow on usize::MAX).
        if self.num_states > 0 {
            if let Some((&from, _)) = self.transitions.range(self.num_states..).next() {
                return Err(BuildError::Invalid(DefinitionError::OutOfRangeState {
                    role: StateRole::TransitionSource,
                    index: from,
                    bound: self.num_states,
                }));
            }
        }

        let mut rows: Vec<BTreeMap<char, StateId>> = vec![BTreeMap::new(); self.num_states];
        for (from, row) in self.transitions {
            // Every key is in range here; with zero declared states the
            // rows are dropped and Dfa::new reports ZeroStates.
            if let Some(slot) = rows.get_mut(from) {
                *slot = row;
            }
        }

        let dfa = Dfa::new(self.alphabet, self.num_states, rows, start, self.accepting)?;
        Ok(dfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_start_state() {
        let result = DfaBuilder::new().states(1).symbol('a').build();
        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn builder_delegates_invariant_checks() {
        let result = DfaBuilder::new().states(0).symbol('a').start(0).build();
        assert!(matches!(
            result,
            Err(BuildError::Invalid(DefinitionError::ZeroStates))
        ));

        let result = DfaBuilder::new().states(1).start(0).build();
        assert!(matches!(
            result,
            Err(BuildError::Invalid(DefinitionError::EmptyAlphabet))
        ));
    }

    #[test]
    fn transition_symbols_join_the_alphabet() {
        let dfa = DfaBuilder::new()
            .states(1)
            .transition(0, 'x', 0)
            .start(0)
            .build()
            .unwrap();

        assert!(dfa.alphabet().contains(&'x'));
    }

    #[test]
    fn transition_row_past_declared_states_is_rejected() {
        let result = DfaBuilder::new()
            .states(2)
            .transition(5, 'a', 0)
            .start(0)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(DefinitionError::OutOfRangeState {
                role: StateRole::TransitionSource,
                ..
            }))
        ));
    }

    #[test]
    fn extreme_source_rows_error_instead_of_sizing_the_table() {
        // usize::MAX must not overflow the layout, and a merely large
        // key must not allocate rows before validation.
        for from in [usize::MAX, 1_000_000_000] {
            let result = DfaBuilder::new()
                .states(2)
                .transition(from, 'a', 0)
                .start(0)
                .build();

            assert_eq!(
                result,
                Err(BuildError::Invalid(DefinitionError::OutOfRangeState {
                    role: StateRole::TransitionSource,
                    index: from,
                    bound: 2,
                }))
            );
        }
    }

    #[test]
    fn reassigned_pair_keeps_last_target() {
        let dfa = DfaBuilder::new()
            .states(3)
            .transition(0, 'a', 1)
            .transition(0, 'a', 2)
            .start(0)
            .build()
            .unwrap();

        assert_eq!(dfa.lookup(0, 'a'), Some(2));
    }

    #[test]
    fn fluent_api_builds_dfa() {
        let dfa = DfaBuilder::new()
            .states(2)
            .alphabet(['a', 'b'])
            .transition(0, 'a', 1)
            .transition(1, 'b', 0)
            .start(0)
            .accepting_states([1, 1])
            .build()
            .unwrap();

        assert_eq!(dfa.num_states(), 2);
        assert_eq!(dfa.start_state(), 0);
        assert_eq!(dfa.accepting_states().len(), 1);
    }
}
