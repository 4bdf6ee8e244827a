use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, io, path::Path};

use crate::error::{DeployError, DeployResult};
use crate::timing::PhaseTimer;

pub const CONFIG_FILE: &str = "deploy.config.json";
pub const ENV_FILE: &str = ".env";

// ---- deploy.config.json ----
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeployConfig {
    /// Provider tag. Kept as written; recognition happens at login/dispatch time.
    pub provider: String,
    /// Launch the Node-based provider CLIs through `npx`.
    #[serde(default)]
    pub npx: bool,
    /// Provider-specific keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeployConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self { provider: provider.into(), npx: false, extra: Map::new() }
    }
}

pub fn load(path: &Path) -> DeployResult<DeployConfig> {
    let _timer = PhaseTimer::start("Load Config");

    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DeployError::ConfigNotFound { path: path.to_path_buf() });
        }
        Err(e) => return Err(e.into()),
    };

    let config: DeployConfig = serde_json::from_str(&text).map_err(|e| DeployError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(provider = %config.provider, extra_keys = config.extra.len(), "config loaded");
    Ok(config)
}
