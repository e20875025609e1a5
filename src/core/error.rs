//! Construction errors for DFA definitions.

use std::fmt;
use thiserror::Error;

/// Which part of the definition referenced a state.
///
/// Carried by [`DefinitionError::OutOfRangeState`] so the caller can tell
/// exactly which invariant was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateRole {
    /// The start state.
    Start,
    /// A member of the accepting-state set.
    Accepting,
    /// A source row of the transition table.
    TransitionSource,
    /// A target of a transition entry.
    TransitionTarget,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Start => "start state",
            Self::Accepting => "accepting state",
            Self::TransitionSource => "transition source state",
            Self::TransitionTarget => "transition target state",
        };
        f.write_str(label)
    }
}

/// Errors detected once, at definition construction.
///
/// A definition that fails to construct must not be simulated; these are
/// the only error values the core ever produces. A partial transition
/// table is *not* one of them — incompleteness surfaces at run time as a
/// stuck verdict.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("automaton must have at least one state")]
    ZeroStates,

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("{role} {index} is out of range [0, {bound})")]
    OutOfRangeState {
        role: StateRole,
        index: usize,
        bound: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_role_index_and_bound() {
        let err = DefinitionError::OutOfRangeState {
            role: StateRole::Start,
            index: 3,
            bound: 3,
        };
        assert_eq!(err.to_string(), "start state 3 is out of range [0, 3)");
    }

    #[test]
    fn messages_identify_the_violated_invariant() {
        assert_eq!(
            DefinitionError::ZeroStates.to_string(),
            "automaton must have at least one state"
        );
        assert_eq!(
            DefinitionError::EmptyAlphabet.to_string(),
            "alphabet must contain at least one symbol"
        );
    }
}
