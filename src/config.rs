use serde::Deserialize;
use std::fs;
use anyhow::{Context, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct ExplorerConfig {
    pub api_base_url: String,               // ex http://127.0.0.1:8080
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: u32,                 // ex 10
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,    // unset = wait forever
}

fn default_rows_per_page() -> u32 {
    10
}

impl ExplorerConfig {
    pub fn load(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config file `{}`", path))?;
        Self::from_toml(&s)
            .with_context(|| format!("parsing `{}` as TOML", path))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: ExplorerConfig = toml::from_str(s)?;
        Ok(cfg)
    }
}

pub fn load(path: &str) -> Result<ExplorerConfig> {
    ExplorerConfig::load(path)
}
