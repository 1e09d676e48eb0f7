//! # Bounty Board - in-memory bounty contract registry
//!
//! This library keeps track of the bounty contracts posted during a single
//! game session (a round). Contracts are created, listed and removed; each
//! one is keyed by an identifier issued from a counter that never goes
//! backwards.
//!
//! ## Architecture
//!
//! - `contracts`: the `BountyContract` record and its identifier type
//! - `registry`: the fail-fast registry that owns the counter and the map
//! - `session`: round lifecycle plus graceful degradation when no registry exists
//! - `shared`: mutex-guarded session handle for multi-threaded callers
//! - `config` / `config_loader`: YAML scenario files
//! - `scenario` / `report`: scenario replay and JSON/text reports
//!
//! ## Example Usage
//!
//! ```rust
//! use bounty_board::session::BountyContractsSession;
//!
//! let mut session = BountyContractsSession::new();
//! assert!(session.list_all().is_empty());
//!
//! session.on_round_starting();
//! let contract = session
//!     .create("Cargo Run", "Shuttle A", 500, "Deliver goods", None, None)
//!     .unwrap();
//! assert_eq!(contract.contract_id(), 0);
//!
//! assert!(session.remove(0));
//! assert!(!session.remove(0));
//! ```
//!
//! ## Error Handling
//!
//! The registry reports typed `RegistryError`s. The session layer logs them
//! under the `bounty.contracts` target and returns `None`/`false`/empty
//! results instead. Scenario loading and report output use `color_eyre`.

pub mod contracts;
pub mod registry;
pub mod session;
pub mod shared;
pub mod config;
pub mod config_loader;
pub mod scenario;
pub mod report;

pub use contracts::{BountyContract, ContractId};
pub use registry::{ContractRegistry, RegistryError};
pub use session::BountyContractsSession;
pub use shared::SharedSession;
