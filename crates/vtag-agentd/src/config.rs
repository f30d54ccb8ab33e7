use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use vtag_model::RestConfig;
use vtag_observe::LoggerConfig;

/// Agent configuration file.
#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub logger: LoggerConfig,
    pub vsphere: RestConfig,
}

impl AgentConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let cfg: AgentConfig = serde_json::from_str(raw)?;
        cfg.vsphere.validate()?;
        Ok(cfg)
    }
}
