use std::{net::SocketAddr, str::FromStr};

use anyhow::{Context, Result};
use github_api::api::GITHUB_HOST;

const ENV_LISTEN_ADDR: &str = "REPO_API_LISTEN_ADDR";
const ENV_GITHUB_BASE: &str = "REPO_API_GITHUB_BASE";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub github_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let github_base = lookup(ENV_GITHUB_BASE)
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| GITHUB_HOST.to_owned());

        Ok(Self {
            listen_addr: parse(ENV_LISTEN_ADDR, &listen_addr)?,
            github_base,
        })
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("{key} has invalid value {value:?}"))
}
