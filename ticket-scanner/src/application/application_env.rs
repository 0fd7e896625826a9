use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_base_url: String,
    pub api_timeout: Duration,

    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_SCANNER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_SCANNER_LOG_FILENAME")?;
        let api_base_url = Self::env_var("TICKET_SCANNER_API_BASE_URL")?;
        let api_timeout = Self::env_var("TICKET_SCANNER_API_TIMEOUT")?.parse()?;
        let api_timeout = Duration::from_secs(api_timeout);
        let access_token = Self::env_var("TICKET_SCANNER_ACCESS_TOKEN")?;
        let refresh_token = Self::env_var_optional("TICKET_SCANNER_REFRESH_TOKEN");

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            api_timeout,
            access_token,
            refresh_token,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    /// Empty value counts as not set
    fn env_var_optional(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
