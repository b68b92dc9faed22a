//! Foundation types for PortLog.
//!
//! This crate provides the identity and record types used throughout the
//! PortLog tracking system. Every other PortLog crate depends on
//! `portlog-types`.
//!
//! # Key Types
//!
//! - [`HashKey`] — Opaque 32-byte content hash under which records are filed
//! - [`AccountId`] — Caller identity (BLAKE3-derived)
//! - [`Role`] — Access-control role (Admin, Authorizer)
//! - [`TimestampRecord`] — Event timestamp entry, grouped by EOS id
//! - [`TxnHeader`] — Shipping-transaction header metadata

pub mod account;
pub mod error;
pub mod hash;
pub mod records;
pub mod role;

pub use account::AccountId;
pub use error::TypeError;
pub use hash::HashKey;
pub use records::{EosId, TimestampRecord, TxnHeader};
pub use role::Role;
