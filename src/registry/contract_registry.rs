//! Contract registry.
//!
//! Tracks contracts by identifier and hands out new identifiers from a
//! counter that only moves forward.

use std::collections::BTreeMap;

use crate::contracts::{BountyContract, ContractId};

/// Errors reported by registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Contract id {id} is already in use")]
    DuplicateId { id: ContractId },

    #[error("No contract with id {id}")]
    NotFound { id: ContractId },

    #[error("Contract id space exhausted at {id}")]
    IdSpaceExhausted { id: ContractId },
}

/// Registry of all contracts for one session
#[derive(Debug, Default)]
pub struct ContractRegistry {
    /// Identifier handed to the next created contract
    next_id: ContractId,
    /// Ids are monotonic, so key order is creation order
    contracts: BTreeMap<ContractId, BountyContract>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose first contract gets `first_id`
    pub fn starting_at(first_id: ContractId) -> Self {
        ContractRegistry {
            next_id: first_id,
            contracts: BTreeMap::new(),
        }
    }

    /// Create a contract and store it under a freshly issued identifier.
    ///
    /// Nothing is mutated on failure. The counter only advances once the
    /// contract has been stored.
    ///
    /// # Errors
    /// * `IdSpaceExhausted` - if issuing another id would overflow the counter
    /// * `DuplicateId` - if the issued id is somehow already stored
    pub fn create(
        &mut self,
        name: impl Into<String>,
        vessel: impl Into<String>,
        reward: i32,
        description: impl Into<String>,
        dna: Option<String>,
        author: Option<String>,
    ) -> Result<BountyContract, RegistryError> {
        let contract_id = self.next_id;
        let successor = contract_id
            .checked_add(1)
            .ok_or(RegistryError::IdSpaceExhausted { id: contract_id })?;

        if self.contracts.contains_key(&contract_id) {
            return Err(RegistryError::DuplicateId { id: contract_id });
        }

        let contract = BountyContract::new(
            contract_id,
            name.into(),
            vessel.into(),
            reward,
            description.into(),
            dna,
            author,
        );
        self.contracts.insert(contract_id, contract.clone());
        self.next_id = successor;

        Ok(contract)
    }

    /// All stored contracts in ascending id order
    pub fn list_all(&self) -> impl Iterator<Item = &BountyContract> {
        self.contracts.values()
    }

    /// Remove a contract, returning it. The counter is left alone.
    pub fn remove(&mut self, contract_id: ContractId) -> Result<BountyContract, RegistryError> {
        self.contracts
            .remove(&contract_id)
            .ok_or(RegistryError::NotFound { id: contract_id })
    }

    pub fn get(&self, contract_id: ContractId) -> Option<&BountyContract> {
        self.contracts.get(&contract_id)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Identifier the next successful `create` will issue
    pub fn next_id(&self) -> ContractId {
        self.next_id
    }

    /// Store a contract under its own id without touching the counter
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, contract: BountyContract) {
        self.contracts.insert(contract.contract_id(), contract);
    }
}
