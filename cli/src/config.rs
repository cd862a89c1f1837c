use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result, anyhow};
use hr_client::ClientConfig;
use platform_session::SessionSettings;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl AppConfig {
    /// Environment first (optionally seeded from `.env`), then command-line
    /// overrides on top.
    pub fn load(api_url: Option<String>, session_file: Option<PathBuf>) -> Result<Self> {
        let api_url = api_url
            .or_else(|| env_non_empty("HR_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let timeout_secs = match env_non_empty("HR_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid HR_HTTP_TIMEOUT_SECS `{raw}`"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(anyhow!("HR_HTTP_TIMEOUT_SECS must be at least 1"));
        }

        let session_file = match session_file {
            Some(path) => path,
            None => SessionSettings::default()
                .path()
                .context("cannot locate the session file")?,
        };

        Ok(Self {
            api_url,
            session_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
