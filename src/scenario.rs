//! Scenario replay.
//!
//! Runs each step of a scenario against a fresh session and records what
//! happened, in order.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{ScenarioConfig, Step};
use crate::contracts::{BountyContract, ContractId};
use crate::session::BountyContractsSession;

/// Result of a single step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    RoundStarted,
    RoundEnded,
    Created { contract: BountyContract },
    CreateFailed,
    Removed { contract_id: ContractId },
    NotRemoved { contract_id: ContractId },
    Listed { contracts: Vec<BountyContract> },
}

/// A step together with its position and outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub index: usize,
    pub action: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Everything a scenario run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub generated_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
    /// Contracts still registered after the last step
    pub final_contracts: Vec<BountyContract>,
}

impl ScenarioReport {
    pub fn created_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Created { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Removed { .. }))
            .count()
    }
}

/// Apply one step to the session
pub fn apply_step(session: &mut BountyContractsSession, step: &Step) -> StepOutcome {
    match step {
        Step::StartRound => {
            session.on_round_starting();
            StepOutcome::RoundStarted
        }
        Step::EndRound => {
            session.on_round_ended();
            StepOutcome::RoundEnded
        }
        Step::Create {
            name,
            vessel,
            reward,
            description,
            dna,
            author,
        } => match session.create(
            name.as_str(),
            vessel.as_str(),
            *reward,
            description.as_str(),
            dna.clone(),
            author.clone(),
        ) {
            Some(contract) => StepOutcome::Created { contract },
            None => StepOutcome::CreateFailed,
        },
        Step::Remove { contract_id } => {
            if session.remove(*contract_id) {
                StepOutcome::Removed {
                    contract_id: *contract_id,
                }
            } else {
                StepOutcome::NotRemoved {
                    contract_id: *contract_id,
                }
            }
        }
        Step::List => StepOutcome::Listed {
            contracts: session.list_all(),
        },
    }
}

/// Replay every step of `config` against a new session
pub fn run_scenario(config: &ScenarioConfig) -> ScenarioReport {
    let mut session =
        BountyContractsSession::with_first_contract_id(config.general().first_contract_id());

    let steps: Vec<StepRecord> = config
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepRecord {
            index,
            action: step.action().to_string(),
            outcome: apply_step(&mut session, step),
        })
        .collect();

    let report = ScenarioReport {
        generated_at: Utc::now(),
        steps,
        final_contracts: session.list_all(),
    };

    info!(
        "Scenario finished: {} created, {} removed, {} remaining",
        report.created_count(),
        report.removed_count(),
        report.final_contracts.len()
    );
    report
}
