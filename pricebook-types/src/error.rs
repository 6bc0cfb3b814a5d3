use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pricebook workspace.
///
/// The unchecked merge path defines no errors at all; this type only
/// surfaces strict-mode precondition violations.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PricebookError {
    /// An input collection violated the merge preconditions (a record with
    /// an empty validity period, or two same-key records overlapping within
    /// one collection).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PricebookError {
    /// Helper: build an `InvalidInput` error from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
