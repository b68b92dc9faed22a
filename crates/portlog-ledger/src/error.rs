/// Errors produced by tracker operations.
///
/// Display strings on the contract-surface variants are stable: external
/// collaborators match on them, so they must not be reworded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("No authority")]
    NoAuthority,

    #[error("Already published data")]
    AlreadyPublished,

    #[error("Incorrect input!!!, data length should be more than 0 and 2 arrays will have to be equal in length")]
    InvalidBatch,

    #[error("No hash ID")]
    NoHashId,

    #[error("no transaction header for the given hash")]
    NoTxnHeader,

    #[error("tracker is already initialized")]
    AlreadyInitialized,

    #[error("tracker lock poisoned")]
    LockPoisoned,
}
