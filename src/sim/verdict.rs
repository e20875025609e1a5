//! Verdicts and run outcomes.

use crate::core::{StateId, Trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final classification of one simulated input string.
///
/// Every variant names the terminal state. `Stuck` is a first-class
/// verdict, not an error: it means the string cannot be classified under
/// the current table — either an undefined entry of a partial table or a
/// symbol outside the alphabet was hit. The two cases are deliberately one
/// outcome; the table has no entry either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The whole string was consumed and the run ended in an accepting
    /// state.
    Accepted { state: StateId },

    /// The whole string was consumed and the run ended in a
    /// non-accepting state.
    Rejected { state: StateId },

    /// The run hit an undefined transition before consuming the whole
    /// string. Reports the offending symbol, the state the run was in,
    /// and the 0-based position of the symbol in the input.
    Stuck {
        symbol: char,
        state: StateId,
        position: usize,
    },
}

impl Verdict {
    /// Whether the string was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Whether the run got stuck before consuming the whole string.
    pub fn is_stuck(&self) -> bool {
        matches!(self, Self::Stuck { .. })
    }

    /// The state the run terminated in.
    ///
    /// For `Stuck` this is the state the run was in when the undefined
    /// transition was hit.
    pub fn terminal_state(&self) -> StateId {
        match *self {
            Self::Accepted { state } | Self::Rejected { state } | Self::Stuck { state, .. } => {
                state
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Accepted { state } => write!(f, "accepted (ended in state {state})"),
            Self::Rejected { state } => write!(f, "rejected (ended in state {state})"),
            Self::Stuck {
                symbol,
                state,
                position,
            } => write!(
                f,
                "stuck on '{symbol}' at position {position} in state {state} (undefined transition)"
            ),
        }
    }
}

/// Everything one run produced: the trace and the verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// The `(symbol, resulting state)` pairs consumed, in order. For a
    /// stuck run, only the successfully consumed prefix appears.
    pub trace: Trace,
    /// The final classification.
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_state_is_named_by_every_variant() {
        assert_eq!(Verdict::Accepted { state: 1 }.terminal_state(), 1);
        assert_eq!(Verdict::Rejected { state: 0 }.terminal_state(), 0);
        assert_eq!(
            Verdict::Stuck {
                symbol: 'c',
                state: 2,
                position: 5,
            }
            .terminal_state(),
            2
        );
    }

    #[test]
    fn stuck_is_distinct_from_rejected() {
        let stuck = Verdict::Stuck {
            symbol: 'b',
            state: 1,
            position: 1,
        };
        assert!(stuck.is_stuck());
        assert!(!stuck.is_accepted());
        assert_ne!(stuck, Verdict::Rejected { state: 1 });
    }

    #[test]
    fn display_reports_symbol_state_and_position_when_stuck() {
        let stuck = Verdict::Stuck {
            symbol: 'c',
            state: 0,
            position: 0,
        };
        assert_eq!(
            stuck.to_string(),
            "stuck on 'c' at position 0 in state 0 (undefined transition)"
        );
    }

    #[test]
    fn verdict_serializes_correctly() {
        let verdict = Verdict::Accepted { state: 3 };
        let json = serde_json::to_string(&verdict).unwrap();
        let deserialized: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, deserialized);
    }
}
