//! Role-gated tracking ledger for PortLog.
//!
//! This crate is the heart of PortLog. It provides:
//! - `AccessControl` role gate (Admin, Authorizer) with one-time initialization
//! - A first-write-wins timestamp store with an EOS-id group index
//! - An overwritable transaction-header store with its own group index
//! - `TrackerReader` / `TrackerWriter` trait boundaries
//! - `InMemoryTracker` implementation for tests and embedding
//!
//! Timestamp and header stores share one hash-key space but are distinct
//! maps: a key may hold a timestamp, a header, or both.

pub mod access;
pub mod error;
pub mod memory;
pub mod traits;

pub use access::AccessControl;
pub use error::TrackerError;
pub use memory::InMemoryTracker;
pub use traits::{TrackerReader, TrackerWriter};
