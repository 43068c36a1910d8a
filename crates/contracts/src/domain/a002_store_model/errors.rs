use thiserror::Error;

/// Reasons a draft model cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Model name is required")]
    EmptyName,

    #[error("Model {0} already exists")]
    DuplicateName(String),

    #[error("A model submission is already in progress")]
    SubmissionInFlight,
}
