//! Build errors for the DFA builder.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building a DFA.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error(transparent)]
    Invalid(#[from] DefinitionError),
}
