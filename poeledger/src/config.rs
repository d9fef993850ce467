use anyhow::Context;
use economy_api::BackendConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_USER_AGENT: &str = "poeledger";

/// Everything the server reads from its environment. Built once in `main`.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) backend: BackendConfig,
    pub(crate) port: u16,
}

impl Config {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let backend_host = var("BACKEND_HOST");
        let user_agent = var("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let backend = BackendConfig::new(backend_host.as_deref(), user_agent)
            .context("BACKEND_HOST must be a valid URL")?;
        let port = var("PORT")
            .map(|port| port.parse::<u16>())
            .transpose()
            .context("PORT must be a valid port number")?
            .unwrap_or(DEFAULT_PORT);
        Ok(Config { backend, port })
    }
}
