use thiserror::Error;

use portlog_ledger::TrackerError;
use portlog_types::TypeError;

/// Errors surfaced by the SDK facade.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error(transparent)]
    Parse(#[from] TypeError),
}

pub type SdkResult<T> = Result<T, SdkError>;
