use serde::{Deserialize, Serialize};

use crate::contracts::ContractId;

/// Log levels accepted in `general.log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Scenario file: general settings plus the steps to replay
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    pub steps: Vec<Step>,
}

impl ScenarioConfig {
    /// Validate the scenario
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.general.log_level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ValidationError::InvalidGeneral(format!(
                    "log_level '{}' must be one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        if self.steps.is_empty() {
            return Err(ValidationError::InvalidSteps(
                "scenario must contain at least one step".to_string(),
            ));
        }

        Ok(())
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Identifier issued to the first contract of each round (default 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_contract_id: Option<ContractId>,
}

impl GeneralConfig {
    pub fn first_contract_id(&self) -> ContractId {
        self.first_contract_id.unwrap_or(0)
    }
}

/// One session operation in a scenario
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    StartRound,
    EndRound,
    Create {
        name: String,
        vessel: String,
        reward: i32,
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dna: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Remove {
        contract_id: ContractId,
    },
    List,
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Step::StartRound => "start_round",
            Step::EndRound => "end_round",
            Step::Create { .. } => "create",
            Step::Remove { .. } => "remove",
            Step::List => "list",
        }
    }
}

/// Scenario validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid scenario steps: {0}")]
    InvalidSteps(String),
}
