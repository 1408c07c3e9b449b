//! YAML seed-plan configuration.
//!
//! Every knob the CLI exposes can also come from a YAML file; flags given
//! on the command line override file values.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// File-backed counterpart of [`crate::pipeline::SeedPlan`].
///
/// All keys are optional; missing keys take the CLI defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedFileConfig {
    pub customers: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub reviews: Option<usize>,
    pub shipments: Option<bool>,
    pub shipment_cap: Option<usize>,
    pub chunk_size: Option<usize>,
    pub seed: Option<u64>,
    pub sanity_check: Option<bool>,
}

impl SeedFileConfig {
    /// Load and parse a YAML plan file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        serde_yaml_ng::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}
