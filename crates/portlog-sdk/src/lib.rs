//! High-level SDK for PortLog.
//!
//! Wraps the tracking ledger in a facade that owns the deployer identity
//! and hands out caller-bound [`Session`]s, so collaborating code never
//! threads `AccountId`s through every call by hand.

pub mod error;
pub mod tracker;

pub use error::{SdkError, SdkResult};
pub use tracker::{PortLog, Session};
