use thiserror::Error;

use crate::board_client::BoardError;
use crate::form::validation::ValidationErrors;

/// Rejected form edits.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

/// Reasons a submission did not end in a created posting.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("A submission is already in flight")]
    InFlight,

    #[error("Job board error: {0}")]
    Board(#[from] BoardError),
}
