//! Contract type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a contract by the registry
pub type ContractId = u32;

/// A bounty offered within the current session.
///
/// Contracts held by a registry are built only by the registry, and the
/// identifier cannot be changed after it is issued. Deserialized contracts
/// are report snapshots and never enter a registry. Text fields are stored
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyContract {
    contract_id: ContractId,
    name: String,
    vessel: String,
    reward: i32,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dna: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl BountyContract {
    pub(crate) fn new(
        contract_id: ContractId,
        name: String,
        vessel: String,
        reward: i32,
        description: String,
        dna: Option<String>,
        author: Option<String>,
    ) -> Self {
        Self {
            contract_id,
            name,
            vessel,
            reward,
            description,
            dna,
            author,
        }
    }

    pub fn contract_id(&self) -> ContractId {
        self.contract_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn reward(&self) -> i32 {
        self.reward
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Genetic identifier of the claimant or target, if one was given
    pub fn dna(&self) -> Option<&str> {
        self.dna.as_deref()
    }

    /// Identity of whoever posted the contract
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl fmt::Display for BountyContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) reward {}",
            self.contract_id, self.name, self.vessel, self.reward
        )
    }
}
