mod config;

use std::{path::PathBuf, sync::Arc};

use tracing::info;

use vtag_core::prelude::{HttpTransport, TagResolver};
use vtag_observe::init_logger;

use crate::config::AgentConfig;

const DEFAULT_CONFIG: &str = "vtag.json";

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) config
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let cfg = AgentConfig::load(&path)?;

    // 2) logger
    init_logger(&cfg.logger)?;
    info!(config = %path.display(), host = %cfg.vsphere.hostname, "agent starting");

    // 3) session
    let transport = Arc::new(HttpTransport::from_config(&cfg.vsphere)?);
    let resolver = TagResolver::connect(&cfg.vsphere, transport).await?;

    // 4) one resolution pass, printed for the caller
    let tags = resolver.resolve_resource_tags().await?;
    info!(resources = tags.len(), "resource tags resolved");
    println!("{}", serde_json::to_string_pretty(&tags)?);

    Ok(())
}
