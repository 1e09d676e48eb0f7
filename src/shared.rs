//! Thread-safe session handle.
//!
//! Every operation holds one lock for its whole duration, so concurrent
//! creators can never be issued the same contract id.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::contracts::{BountyContract, ContractId};
use crate::session::BountyContractsSession;

/// Cloneable handle to a session shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<BountyContractsSession>>,
}

impl SharedSession {
    pub fn new(session: BountyContractsSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Each operation is a single insert or remove, so a panic while the
    // lock was held cannot leave the registry half-updated.
    fn lock(&self) -> MutexGuard<'_, BountyContractsSession> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn on_round_starting(&self) {
        self.lock().on_round_starting();
    }

    pub fn on_round_ended(&self) {
        self.lock().on_round_ended();
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    pub fn create(
        &self,
        name: impl Into<String>,
        vessel: impl Into<String>,
        reward: i32,
        description: impl Into<String>,
        dna: Option<String>,
        author: Option<String>,
    ) -> Option<BountyContract> {
        self.lock()
            .create(name, vessel, reward, description, dna, author)
    }

    pub fn list_all(&self) -> Vec<BountyContract> {
        self.lock().list_all()
    }

    pub fn get(&self, contract_id: ContractId) -> Option<BountyContract> {
        self.lock().get(contract_id)
    }

    pub fn remove(&self, contract_id: ContractId) -> bool {
        self.lock().remove(contract_id)
    }
}
