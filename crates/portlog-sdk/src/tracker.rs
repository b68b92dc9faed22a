use tracing::debug;

use portlog_ledger::{InMemoryTracker, TrackerReader, TrackerWriter};
use portlog_types::{AccountId, EosId, HashKey, Role, TimestampRecord, TxnHeader};

use crate::error::{SdkError, SdkResult};

/// High-level PortLog tracking API.
///
/// Owns an [`InMemoryTracker`] together with the deployer account that
/// initialized it. Reads are exposed directly; writes go through a
/// [`Session`] bound to a caller identity.
pub struct PortLog {
    deployer: AccountId,
    tracker: InMemoryTracker,
}

impl PortLog {
    /// Initialize a new tracker with a fresh deployer identity.
    pub fn init() -> SdkResult<Self> {
        Self::init_with_deployer(AccountId::ephemeral())
    }

    /// Initialize with a specific deployer account.
    pub fn init_with_deployer(deployer: AccountId) -> SdkResult<Self> {
        let tracker = InMemoryTracker::new();
        tracker.initialize(deployer)?;
        debug!(deployer = %deployer, "portlog initialized");
        Ok(Self { deployer, tracker })
    }

    /// The account that initialized this tracker (holds Admin + Authorizer).
    pub fn deployer(&self) -> AccountId {
        self.deployer
    }

    /// The underlying tracker, for callers that want the trait surface.
    pub fn tracker(&self) -> &InMemoryTracker {
        &self.tracker
    }

    /// A write session acting as `caller`.
    pub fn session(&self, caller: AccountId) -> Session<'_> {
        Session { portlog: self, caller }
    }

    /// A write session acting as the deployer.
    pub fn as_deployer(&self) -> Session<'_> {
        self.session(self.deployer)
    }

    /// Parse a `0x`-prefixed or bare 64-char hex string into a key.
    pub fn parse_key(s: &str) -> SdkResult<HashKey> {
        Ok(HashKey::from_hex(s)?)
    }

    // ---- Read operations ----

    pub fn has_role(&self, role: Role, account: &AccountId) -> bool {
        self.tracker.has_role(role, account)
    }

    pub fn get_timestamp(&self, key: &HashKey) -> SdkResult<u64> {
        Ok(self.tracker.get_timestamp(key)?)
    }

    pub fn verify_timestamp(&self, key: &HashKey) -> bool {
        self.tracker.verify_timestamp(key)
    }

    pub fn eos_timestamps(&self, eos_id: EosId) -> Vec<TimestampRecord> {
        self.tracker.eos_timestamps(eos_id)
    }

    pub fn txn_header(&self, key: &HashKey) -> SdkResult<TxnHeader> {
        Ok(self.tracker.txn_header(key)?)
    }

    pub fn batch_verify_headers(&self, keys: &[HashKey]) -> Vec<bool> {
        self.tracker.batch_verify_headers(keys)
    }

    pub fn eos_headers(&self, eos_id: EosId) -> Vec<TxnHeader> {
        self.tracker.eos_headers(eos_id)
    }
}

/// A caller-bound write handle.
///
/// Sessions are cheap and short-lived; every write re-runs the role gate,
/// so holding a session grants nothing by itself.
pub struct Session<'a> {
    portlog: &'a PortLog,
    caller: AccountId,
}

impl Session<'_> {
    pub fn caller(&self) -> AccountId {
        self.caller
    }

    pub fn store_timestamp(&self, key: HashKey, record: TimestampRecord) -> SdkResult<()> {
        self.portlog
            .tracker
            .store_timestamp(&self.caller, key, record)
            .map_err(SdkError::from)
    }

    pub fn batch_store_timestamps(
        &self,
        keys: &[HashKey],
        records: &[TimestampRecord],
    ) -> SdkResult<()> {
        self.portlog
            .tracker
            .batch_store_timestamps(&self.caller, keys, records)
            .map_err(SdkError::from)
    }

    pub fn store_header(&self, key: HashKey, header: TxnHeader) -> SdkResult<()> {
        self.portlog
            .tracker
            .store_header(&self.caller, key, header)
            .map_err(SdkError::from)
    }

    pub fn batch_store_headers(&self, keys: &[HashKey], headers: &[TxnHeader]) -> SdkResult<()> {
        self.portlog
            .tracker
            .batch_store_headers(&self.caller, keys, headers)
            .map_err(SdkError::from)
    }
}
