//! TOML loading for [`PlannerConfig`].
//!
//! Every field is optional in the file; missing ones keep their defaults.
//!
//! ```toml
//! building_range = 6
//! early_scouts   = 2
//! priority_bump  = 15
//! ```

use std::path::Path;

use tp_core::PlannerConfig;

use crate::{PlannerError, PlannerResult};

/// Read and validate a planner config file.
pub fn load_config(path: impl AsRef<Path>) -> PlannerResult<PlannerConfig> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Parse and validate a planner config from TOML text.
pub fn parse_config(text: &str) -> PlannerResult<PlannerConfig> {
    let config: PlannerConfig = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

pub(crate) fn validate(config: &PlannerConfig) -> PlannerResult<()> {
    if config.urgent_fraction == 0 {
        return Err(PlannerError::Config("urgent_fraction must be at least 1".into()));
    }
    if !(config.colony_size_threshold.is_finite() && config.colony_size_threshold > 0.0) {
        return Err(PlannerError::Config(format!(
            "colony_size_threshold must be a positive number, got {}",
            config.colony_size_threshold
        )));
    }
    Ok(())
}
