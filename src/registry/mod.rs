//! # Contract Registry Module
//!
//! In-memory store of every bounty contract posted during the current
//! session. The registry owns a monotonically increasing identifier counter
//! and an ordered map from identifier to contract.
//!
//! ## Invariants
//!
//! - Every key in the map equals its contract's `contract_id`
//! - The counter is strictly greater than every identifier ever issued,
//!   so identifiers are never reused, even after removal
//! - A failed creation mutates nothing
//!
//! ## Error Handling
//!
//! Operations here fail fast with [`RegistryError`]. Callers that need the
//! degrade-quietly behaviour of a session go through
//! [`crate::session::BountyContractsSession`] instead, which turns these
//! errors into sentinel values and log messages.

pub mod contract_registry;

pub use contract_registry::{ContractRegistry, RegistryError};
