use portlog_types::{AccountId, EosId, HashKey, Role, TimestampRecord, TxnHeader};

use crate::error::TrackerError;

/// Write boundary for tracker mutations.
///
/// Every method except `initialize` requires `caller` to hold the
/// Authorizer role and fails with [`TrackerError::NoAuthority`] before any
/// state change otherwise.
pub trait TrackerWriter: Send + Sync {
    /// One-time bootstrap granting Admin and Authorizer to `account`.
    fn initialize(&self, account: AccountId) -> Result<(), TrackerError>;

    /// Store one timestamp record. Fails with
    /// [`TrackerError::AlreadyPublished`] if `key` already holds one.
    fn store_timestamp(
        &self,
        caller: &AccountId,
        key: HashKey,
        record: TimestampRecord,
    ) -> Result<(), TrackerError>;

    /// Store a batch of timestamp records. Arrays must be equal-length and
    /// non-empty; already-published keys are skipped, not errors.
    fn batch_store_timestamps(
        &self,
        caller: &AccountId,
        keys: &[HashKey],
        records: &[TimestampRecord],
    ) -> Result<(), TrackerError>;

    /// Store one transaction header, replacing any existing one for `key`.
    fn store_header(
        &self,
        caller: &AccountId,
        key: HashKey,
        header: TxnHeader,
    ) -> Result<(), TrackerError>;

    /// Store a batch of transaction headers with per-item overwrite
    /// semantics and the same shape validation as timestamps.
    fn batch_store_headers(
        &self,
        caller: &AccountId,
        keys: &[HashKey],
        headers: &[TxnHeader],
    ) -> Result<(), TrackerError>;
}

/// Read boundary for tracker queries. All methods are side-effect-free.
pub trait TrackerReader: Send + Sync {
    /// Role membership lookup; never fails.
    fn has_role(&self, role: Role, account: &AccountId) -> bool;

    /// The stored timestamp for `key`, or [`TrackerError::NoHashId`].
    fn get_timestamp(&self, key: &HashKey) -> Result<u64, TrackerError>;

    /// Whether a timestamp record exists for `key`; never fails.
    fn verify_timestamp(&self, key: &HashKey) -> bool;

    /// All timestamp records filed under `eos_id`, in first-insertion order.
    /// Empty if the id was never used.
    fn eos_timestamps(&self, eos_id: EosId) -> Vec<TimestampRecord>;

    /// The stored header for `key`, or [`TrackerError::NoTxnHeader`].
    fn txn_header(&self, key: &HashKey) -> Result<TxnHeader, TrackerError>;

    /// Presence flag per input key, preserving order and length; never
    /// fails.
    fn batch_verify_headers(&self, keys: &[HashKey]) -> Vec<bool>;

    /// All headers filed under `eos_id`, in first-insertion order.
    fn eos_headers(&self, eos_id: EosId) -> Vec<TxnHeader>;
}
