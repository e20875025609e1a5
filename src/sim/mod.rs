//! The simulator: replaying input strings against a definition.
//!
//! [`simulate`] is the one-shot entry point; [`Run`] is the incremental
//! one for callers that feed symbols as they arrive. Both produce a
//! [`RunOutcome`] pairing the [`Verdict`] with the trace of everything
//! that was consumed.

mod run;
mod verdict;

pub use run::{simulate, Run, StepResult};
pub use verdict::{RunOutcome, Verdict};
