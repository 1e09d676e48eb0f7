use crate::config::ScenarioConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load, parse and validate a scenario from a YAML file
pub fn load_scenario(scenario_path: &Path) -> Result<ScenarioConfig> {
    info!("Loading scenario from: {:?}", scenario_path);

    let file = File::open(scenario_path)
        .wrap_err_with(|| format!("Failed to open scenario '{}'", scenario_path.display()))?;

    let config: ScenarioConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse scenario '{}'", scenario_path.display()))?;

    config.validate()?;

    info!("Scenario contains {} steps", config.steps.len());
    Ok(config)
}
