//! Simulation runs.
//!
//! A [`Run`] replays symbols against a shared, immutable [`Dfa`]. Each run
//! owns its own ephemeral state (current state, trace, stuck marker), so
//! any number of runs can execute against the same definition without
//! coordination.

use super::verdict::{RunOutcome, Verdict};
use crate::core::{Dfa, StateId, Trace, TraceStep};

/// Result of feeding one symbol to a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The transition was defined; the run advanced to this state.
    Advanced(StateId),

    /// No transition was defined for the symbol; the run is stuck.
    /// Reports the symbol, the state the run was in, and the 0-based
    /// position of the symbol.
    Stuck {
        symbol: char,
        state: StateId,
        position: usize,
    },
}

/// One in-flight simulation over a borrowed definition.
///
/// A run moves Start → Running → one of {Accepted, Rejected, Stuck}:
/// [`step`](Self::step) re-enters Running once per consumed symbol, and
/// [`finish`](Self::finish) settles the terminal verdict. Once stuck, a
/// run is inert - further steps consume nothing and re-report the
/// original stuck marker.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::DfaBuilder;
/// use acceptor::sim::{Run, StepResult};
///
/// let dfa = DfaBuilder::new()
///     .states(2)
///     .alphabet(['a'])
///     .transition(0, 'a', 1)
///     .start(0)
///     .accepting(1)
///     .build()
///     .unwrap();
///
/// let mut run = Run::new(&dfa);
/// assert_eq!(run.step('a'), StepResult::Advanced(1));
///
/// let outcome = run.finish();
/// assert!(outcome.verdict.is_accepted());
/// ```
#[derive(Clone, Debug)]
pub struct Run<'a> {
    dfa: &'a Dfa,
    current: StateId,
    trace: Trace,
    consumed: usize,
    stuck: Option<(char, StateId, usize)>,
}

impl<'a> Run<'a> {
    /// Start a fresh run in the definition's start state.
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            current: dfa.start_state(),
            trace: Trace::new(),
            consumed: 0,
            stuck: None,
        }
    }

    /// The state the run is currently in.
    ///
    /// For a stuck run this stays at the state the undefined transition
    /// was hit in.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// The trace recorded so far.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Whether the run has hit an undefined transition.
    pub fn is_stuck(&self) -> bool {
        self.stuck.is_some()
    }

    /// Feed one symbol to the run.
    ///
    /// Looks up `(current state, symbol)` in the table. Undefined entries
    /// and out-of-alphabet symbols are the same outcome: the table has no
    /// entry for either, so the run gets stuck where it stands. An
    /// already-stuck run stays stuck and re-reports its marker.
    pub fn step(&mut self, symbol: char) -> StepResult {
        if let Some((symbol, state, position)) = self.stuck {
            return StepResult::Stuck {
                symbol,
                state,
                position,
            };
        }

        match self.dfa.lookup(self.current, symbol) {
            Some(next) => {
                self.current = next;
                self.trace = self.trace.record(TraceStep {
                    symbol,
                    state: next,
                });
                self.consumed += 1;
                StepResult::Advanced(next)
            }
            None => {
                let marker = (symbol, self.current, self.consumed);
                self.stuck = Some(marker);
                StepResult::Stuck {
                    symbol,
                    state: self.current,
                    position: self.consumed,
                }
            }
        }
    }

    /// Settle the run into its terminal verdict.
    ///
    /// A stuck run reports `Stuck` with its marker; otherwise the verdict
    /// is `Accepted` iff the current state is accepting, `Rejected`
    /// otherwise. A run that consumed nothing is judged on the start
    /// state, so the empty string is accepted exactly when the start
    /// state is accepting.
    pub fn finish(self) -> RunOutcome {
        let verdict = match self.stuck {
            Some((symbol, state, position)) => Verdict::Stuck {
                symbol,
                state,
                position,
            },
            None if self.dfa.is_accepting(self.current) => Verdict::Accepted {
                state: self.current,
            },
            None => Verdict::Rejected {
                state: self.current,
            },
        };

        RunOutcome {
            trace: self.trace,
            verdict,
        }
    }
}

/// Simulate one input string against a definition.
///
/// Defined as [`Run::new`] + one [`Run::step`] per character +
/// [`Run::finish`], so the one-shot and incremental APIs cannot diverge.
/// Any string is a legal input; invalidity only ever shows up as a
/// `Stuck` verdict.
///
/// # Example
///
/// ```rust
/// use acceptor::builder::DfaBuilder;
/// use acceptor::sim::simulate;
///
/// // Accepts strings over {a, b} ending in 'a'.
/// let dfa = DfaBuilder::new()
///     .states(2)
///     .alphabet(['a', 'b'])
///     .transition(0, 'a', 1)
///     .transition(0, 'b', 0)
///     .transition(1, 'a', 1)
///     .transition(1, 'b', 0)
///     .start(0)
///     .accepting(1)
///     .build()
///     .unwrap();
///
/// assert!(simulate(&dfa, "ba").verdict.is_accepted());
/// assert!(!simulate(&dfa, "ab").verdict.is_accepted());
/// assert!(simulate(&dfa, "a?b").verdict.is_stuck());
/// ```
pub fn simulate(dfa: &Dfa, input: &str) -> RunOutcome {
    let mut run = Run::new(dfa);
    for symbol in input.chars() {
        if let StepResult::Stuck { .. } = run.step(symbol) {
            break;
        }
    }
    run.finish()
}
