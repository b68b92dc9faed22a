use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use portlog_types::{AccountId, EosId, HashKey, Role, TimestampRecord, TxnHeader};

use crate::access::AccessControl;
use crate::error::TrackerError;
use crate::traits::{TrackerReader, TrackerWriter};

/// In-memory tracker implementation for tests, local demos, and embedding.
///
/// All state sits behind a single `RwLock`, so every call runs to
/// completion with exclusive (or shared, for reads) access: the serialized
/// transaction model the contract surface assumes.
pub struct InMemoryTracker {
    inner: RwLock<TrackerState>,
}

#[derive(Default)]
struct TrackerState {
    access: AccessControl,
    timestamps: HashMap<HashKey, TimestampRecord>,
    headers: HashMap<HashKey, TxnHeader>,
    // Group indexes hold keys in first-insertion order; listings resolve
    // them against the maps above.
    eos_timestamps: HashMap<EosId, Vec<HashKey>>,
    eos_headers: HashMap<EosId, Vec<HashKey>>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TrackerState::default()),
        }
    }

    /// Insert one timestamp record if `key` is unpublished. Returns whether
    /// the record was inserted; the caller decides whether an existing key
    /// is an error (single path) or a skip (batch path).
    fn store_timestamp_item(
        state: &mut TrackerState,
        key: HashKey,
        record: TimestampRecord,
    ) -> bool {
        if state.timestamps.contains_key(&key) {
            return false;
        }
        state.eos_timestamps.entry(record.eos_id).or_default().push(key);
        state.timestamps.insert(key, record);
        true
    }

    /// Insert or replace one header. The group index gains the key only on
    /// its first occurrence; overwrites leave the index untouched.
    fn store_header_item(state: &mut TrackerState, key: HashKey, header: TxnHeader) {
        if !state.headers.contains_key(&key) {
            state.eos_headers.entry(header.eos_id).or_default().push(key);
        }
        state.headers.insert(key, header);
    }

    /// Batch shape gate: both arrays non-empty and equal in length, checked
    /// before any per-item processing.
    fn check_batch_shape(keys: usize, payloads: usize) -> Result<(), TrackerError> {
        if keys == 0 || keys != payloads {
            return Err(TrackerError::InvalidBatch);
        }
        Ok(())
    }
}

impl Default for InMemoryTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerWriter for InMemoryTracker {
    fn initialize(&self, account: AccountId) -> Result<(), TrackerError> {
        let mut state = self.inner.write().map_err(|_| TrackerError::LockPoisoned)?;
        state.access.initialize(account)?;
        debug!(account = %account, "tracker initialized");
        Ok(())
    }

    fn store_timestamp(
        &self,
        caller: &AccountId,
        key: HashKey,
        record: TimestampRecord,
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.write().map_err(|_| TrackerError::LockPoisoned)?;
        state.access.require_authorizer(caller)?;

        if !Self::store_timestamp_item(&mut state, key, record) {
            return Err(TrackerError::AlreadyPublished);
        }
        debug!(key = %key, eos_id = record.eos_id, "timestamp stored");
        Ok(())
    }

    fn batch_store_timestamps(
        &self,
        caller: &AccountId,
        keys: &[HashKey],
        records: &[TimestampRecord],
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.write().map_err(|_| TrackerError::LockPoisoned)?;
        state.access.require_authorizer(caller)?;
        Self::check_batch_shape(keys.len(), records.len())?;

        let mut stored = 0usize;
        for (key, record) in keys.iter().zip(records) {
            // Already-published keys are skipped, not errors; the single
            // item path alone treats duplicates as a failure.
            if Self::store_timestamp_item(&mut state, *key, *record) {
                stored += 1;
            }
        }
        debug!(stored, skipped = keys.len() - stored, "timestamp batch stored");
        Ok(())
    }

    fn store_header(
        &self,
        caller: &AccountId,
        key: HashKey,
        header: TxnHeader,
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.write().map_err(|_| TrackerError::LockPoisoned)?;
        state.access.require_authorizer(caller)?;

        let eos_id = header.eos_id;
        Self::store_header_item(&mut state, key, header);
        debug!(key = %key, eos_id, "header stored");
        Ok(())
    }

    fn batch_store_headers(
        &self,
        caller: &AccountId,
        keys: &[HashKey],
        headers: &[TxnHeader],
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.write().map_err(|_| TrackerError::LockPoisoned)?;
        state.access.require_authorizer(caller)?;
        Self::check_batch_shape(keys.len(), headers.len())?;

        for (key, header) in keys.iter().zip(headers) {
            Self::store_header_item(&mut state, *key, header.clone());
        }
        debug!(count = keys.len(), "header batch stored");
        Ok(())
    }
}

impl TrackerReader for InMemoryTracker {
    fn has_role(&self, role: Role, account: &AccountId) -> bool {
        // Specified never to fail: a poisoned lock reads as "no role".
        self.inner
            .read()
            .map(|state| state.access.has_role(role, account))
            .unwrap_or(false)
    }

    fn get_timestamp(&self, key: &HashKey) -> Result<u64, TrackerError> {
        let state = self.inner.read().map_err(|_| TrackerError::LockPoisoned)?;
        state
            .timestamps
            .get(key)
            .map(|record| record.timestamp)
            .ok_or(TrackerError::NoHashId)
    }

    fn verify_timestamp(&self, key: &HashKey) -> bool {
        self.inner
            .read()
            .map(|state| state.timestamps.contains_key(key))
            .unwrap_or(false)
    }

    fn eos_timestamps(&self, eos_id: EosId) -> Vec<TimestampRecord> {
        let Ok(state) = self.inner.read() else {
            return Vec::new();
        };
        state
            .eos_timestamps
            .get(&eos_id)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key| state.timestamps.get(key).copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn txn_header(&self, key: &HashKey) -> Result<TxnHeader, TrackerError> {
        let state = self.inner.read().map_err(|_| TrackerError::LockPoisoned)?;
        state.headers.get(key).cloned().ok_or(TrackerError::NoTxnHeader)
    }

    fn batch_verify_headers(&self, keys: &[HashKey]) -> Vec<bool> {
        let Ok(state) = self.inner.read() else {
            return vec![false; keys.len()];
        };
        keys.iter().map(|key| state.headers.contains_key(key)).collect()
    }

    fn eos_headers(&self, eos_id: EosId) -> Vec<TxnHeader> {
        let Ok(state) = self.inner.read() else {
            return Vec::new();
        };
        state
            .eos_headers
            .get(&eos_id)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key| state.headers.get(key).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
