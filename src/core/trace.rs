//! Simulation traces.
//!
//! A trace is the ordered record of what one run consumed: one
//! `(symbol, resulting state)` pair per transition taken. Traces are
//! immutable values; `record` returns a new trace rather than mutating,
//! following functional programming principles.

use super::definition::StateId;
use serde::{Deserialize, Serialize};

/// One consumed symbol and the state the automaton landed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// The symbol that was consumed.
    pub symbol: char,
    /// The state entered after consuming it.
    pub state: StateId,
}

/// Ordered trace of a simulation run.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{Trace, TraceStep};
///
/// let trace = Trace::new();
/// let trace = trace.record(TraceStep { symbol: 'a', state: 1 });
/// let trace = trace.record(TraceStep { symbol: 'b', state: 0 });
///
/// assert_eq!(trace.steps().len(), 2);
/// assert_eq!(trace.path(0), vec![0, 1, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the step added.
    pub fn record(&self, step: TraceStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// All recorded steps, in consumption order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The sequence of states visited, starting from `start`.
    ///
    /// Always one longer than [`steps`](Self::steps): the start state,
    /// then the state entered after each consumed symbol.
    pub fn path(&self, start: StateId) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(start);
        path.extend(self.steps.iter().map(|step| step.state));
        path
    }

    /// The state after the last recorded step, or `start` for an empty
    /// trace.
    pub fn last_state(&self, start: StateId) -> StateId {
        self.steps.last().map_or(start, |step| step.state)
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether any step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
