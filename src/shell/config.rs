use anyhow::{Context, bail};
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "MOCK_SERVER_ADDR";
pub const CONTEXT_BASE_VAR: &str = "MOCK_SERVER_CONTEXT_BASE";
pub const SEED_VAR: &str = "MOCK_SERVER_SEED";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CONTEXT_BASE: &str = "https://your-org.cloud.onebox.dynamics.com/data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Prefix of every `@odata.context` URL.
    pub context_base: String,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{ADDR_VAR} must be a socket address"))?;

        let context_base = lookup(CONTEXT_BASE_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTEXT_BASE.to_string());

        let seed_sample_data = match lookup(SEED_VAR) {
            None => true,
            Some(raw) => parse_flag(&raw).with_context(|| format!("{SEED_VAR} must be true or false"))?,
        };

        Ok(Self {
            bind_addr,
            context_base,
            seed_sample_data,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{other}'"),
    }
}
