//! CLI configuration file.
//!
//! ```json
//! { "seed": 7, "session": { "deletion_policy": "protect_occupied" } }
//! ```
//!
//! Every field is optional. Command-line flags win over file values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use seatplan_logic::session::SessionConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub session: SessionConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
