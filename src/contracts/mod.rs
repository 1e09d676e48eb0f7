//! Bounty contract records.
//!
//! A contract describes a task with a reward offered within a single session.
//! Records are created by the registry, which assigns their identifiers.

pub mod types;

pub use types::{BountyContract, ContractId};
