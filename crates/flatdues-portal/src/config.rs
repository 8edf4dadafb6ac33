use serde::{Deserialize, Serialize};

/// Portal configuration - loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the billing backend, e.g. "http://localhost:5000"
    pub api_url: String,
    /// File holding the serialized principal across restarts
    pub session_file: String,
    /// Per-request timeout; a hung request must not hold a control disabled forever
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Load portal config from a YAML file with FLATDUES__ env var overrides.
pub fn load_config(path: &str) -> anyhow::Result<PortalConfig> {
    use anyhow::Context;
    let config: PortalConfig = config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("FLATDUES")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build config from: {}", path))?
        .try_deserialize()
        .with_context(|| format!("Failed to deserialize config from: {}", path))?;
    Ok(config)
}
