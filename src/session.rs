//! Session-level access to the contract registry.
//!
//! A session owns at most one registry. It is installed when a round starts
//! and dropped when the round ends. Without a registry every operation is a
//! no-op: creation yields `None`, listing yields nothing and removal yields
//! `false`. Registry errors are logged here and never propagated.

use log::{debug, error, info, warn};

use crate::contracts::{BountyContract, ContractId};
use crate::registry::ContractRegistry;

/// Log target for all contract diagnostics
pub const LOG_TARGET: &str = "bounty.contracts";

/// Optional handle to the registry of the current round
#[derive(Debug, Default)]
pub struct BountyContractsSession {
    registry: Option<ContractRegistry>,
    first_contract_id: ContractId,
}

impl BountyContractsSession {
    /// A session with no registry yet
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose registries issue ids starting at `first_contract_id`
    pub fn with_first_contract_id(first_contract_id: ContractId) -> Self {
        BountyContractsSession {
            registry: None,
            first_contract_id,
        }
    }

    /// Install a fresh, empty registry, replacing any previous one
    pub fn on_round_starting(&mut self) {
        if let Some(previous) = &self.registry {
            info!(
                target: LOG_TARGET,
                "Discarding {} contracts from the previous round",
                previous.len()
            );
        }
        self.registry = Some(ContractRegistry::starting_at(self.first_contract_id));
        info!(target: LOG_TARGET, "Bounty contract registry created");
    }

    /// Drop the registry. Later operations degrade until the next round.
    pub fn on_round_ended(&mut self) {
        if let Some(registry) = self.registry.take() {
            info!(
                target: LOG_TARGET,
                "Bounty contract registry discarded with {} contracts",
                registry.len()
            );
        }
    }

    pub fn is_active(&self) -> bool {
        self.registry.is_some()
    }

    /// Direct access to the registry, if a round is running
    pub fn registry(&self) -> Option<&ContractRegistry> {
        self.registry.as_ref()
    }

    /// Post a new contract. Returns `None` when no round is running or the
    /// registry refuses the contract.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        vessel: impl Into<String>,
        reward: i32,
        description: impl Into<String>,
        dna: Option<String>,
        author: Option<String>,
    ) -> Option<BountyContract> {
        let Some(registry) = self.registry.as_mut() else {
            debug!(target: LOG_TARGET, "No registry, contract not created");
            return None;
        };

        match registry.create(name, vessel, reward, description, dna, author) {
            Ok(contract) => {
                debug!(target: LOG_TARGET, "Created bounty contract {}", contract);
                Some(contract)
            }
            Err(err) => {
                error!(target: LOG_TARGET, "Failed to create bounty contract: {}", err);
                None
            }
        }
    }

    /// Snapshot of all contracts in creation order
    pub fn list_all(&self) -> Vec<BountyContract> {
        self.registry
            .as_ref()
            .map(|registry| registry.list_all().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, contract_id: ContractId) -> Option<BountyContract> {
        self.registry.as_ref()?.get(contract_id).cloned()
    }

    /// Remove a contract. Returns `true` only if an entry was removed.
    pub fn remove(&mut self, contract_id: ContractId) -> bool {
        let Some(registry) = self.registry.as_mut() else {
            debug!(target: LOG_TARGET, "No registry, contract {} not removed", contract_id);
            return false;
        };

        match registry.remove(contract_id) {
            Ok(_) => true,
            Err(err) => {
                warn!(
                    target: LOG_TARGET,
                    "Failed to remove bounty contract with {}: {}", contract_id, err
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String, String)>> = RefCell::new(Vec::new());
    }

    /// Records log lines per test thread so parallel tests don't see each other
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|lines| {
                lines.borrow_mut().push((
                    record.level(),
                    record.target().to_string(),
                    record.args().to_string(),
                ))
            });
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
    static INIT_LOGGER: Once = Once::new();

    fn capture_logs() {
        INIT_LOGGER.call_once(|| {
            log::set_logger(&CAPTURE_LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        CAPTURED.with(|lines| lines.borrow_mut().clear());
    }

    fn captured_at(level: Level) -> Vec<(String, String)> {
        CAPTURED.with(|lines| {
            lines
                .borrow()
                .iter()
                .filter(|(l, _, _)| *l == level)
                .map(|(_, target, message)| (target.clone(), message.clone()))
                .collect()
        })
    }

    fn started() -> BountyContractsSession {
        let mut session = BountyContractsSession::new();
        session.on_round_starting();
        session
    }

    #[test]
    fn test_duplicate_id_logs_error_and_fails() {
        capture_logs();
        let mut session = started();
        let squatter = BountyContract::new(
            0,
            "Squatter".to_string(),
            "Derelict".to_string(),
            1,
            "Occupies the next id".to_string(),
            None,
            None,
        );
        session.registry.as_mut().unwrap().insert_unchecked(squatter.clone());

        let created = session.create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None);

        assert!(created.is_none());
        assert_eq!(session.list_all(), vec![squatter]);
        assert_eq!(session.registry().map(|r| r.next_id()), Some(0));

        let errors = captured_at(Level::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, LOG_TARGET);
        assert!(errors[0].1.contains("Contract id 0 is already in use"));
        assert!(captured_at(Level::Warn).is_empty());
    }

    #[test]
    fn test_missing_remove_logs_warning() {
        capture_logs();
        let mut session = started();

        assert!(!session.remove(5));

        let warnings = captured_at(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, LOG_TARGET);
        assert!(warnings[0].1.contains("No contract with id 5"));
        assert!(captured_at(Level::Error).is_empty());
    }

    #[test]
    fn test_inactive_session_logs_no_failures() {
        capture_logs();
        let mut session = BountyContractsSession::new();

        session.create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None);
        session.remove(0);

        assert!(captured_at(Level::Error).is_empty());
        assert!(captured_at(Level::Warn).is_empty());
        assert!(captured_at(Level::Debug)
            .iter()
            .all(|(target, _)| target == LOG_TARGET));
    }

    #[test]
    fn test_inactive_session_degrades() {
        let mut session = BountyContractsSession::new();

        assert!(!session.is_active());
        assert!(session
            .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
            .is_none());
        assert!(session.list_all().is_empty());
        assert!(!session.remove(0));
        assert!(session.get(0).is_none());
    }

    #[test]
    fn test_round_scenario() {
        let mut session = started();

        let cargo = session
            .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
            .unwrap();
        assert_eq!(cargo.contract_id(), 0);
        assert_eq!(cargo.reward(), 500);

        let bounty = session
            .create(
                "Bounty",
                "Shuttle B",
                1000,
                "Capture target",
                Some("ABC123".to_string()),
                None,
            )
            .unwrap();
        assert_eq!(bounty.contract_id(), 1);

        let all = session.list_all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&cargo));
        assert!(all.contains(&bounty));

        assert!(session.remove(0));
        let remaining: Vec<ContractId> =
            session.list_all().iter().map(|c| c.contract_id()).collect();
        assert_eq!(remaining, vec![1]);

        assert!(!session.remove(0));
    }

    #[test]
    fn test_round_restart_clears_contracts() {
        let mut session = started();
        session.create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None);

        session.on_round_starting();

        assert!(session.list_all().is_empty());
        let next = session
            .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
            .unwrap();
        assert_eq!(next.contract_id(), 0);
    }

    #[test]
    fn test_round_end_discards_registry() {
        let mut session = started();
        session.create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None);

        session.on_round_ended();

        assert!(!session.is_active());
        assert!(session.list_all().is_empty());
        assert!(!session.remove(0));
    }

    #[test]
    fn test_first_contract_id_applies_to_each_round() {
        let mut session = BountyContractsSession::with_first_contract_id(1);
        session.on_round_starting();

        let contract = session
            .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
            .unwrap();
        assert_eq!(contract.contract_id(), 1);
        assert_eq!(session.registry().map(|r| r.next_id()), Some(2));
    }

    #[test]
    fn test_exhausted_ids_report_failure() {
        let mut session = BountyContractsSession::with_first_contract_id(ContractId::MAX);
        session.on_round_starting();

        assert!(session
            .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
            .is_none());
        assert!(session.list_all().is_empty());
    }
}
