//! Errors for the context builder.

use thiserror::Error;

/// Errors that can occur when building a context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
