//! Application config: Telegram connection, logging and metadata lookup. Loaded from env.

use anyhow::Result;
use citation_sources::{HttpSettings, RetryPolicy, DEFAULT_CROSSREF_URL, DEFAULT_USER_AGENT};
use refbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RefbotConfig {
    /// BOT_TOKEN; only `run` needs it.
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// CROSSREF_API_URL
    pub crossref_api_url: String,
    pub http_timeout_secs: u64,
    pub http_max_retries: u32,
    pub http_user_agent: String,
}

impl RefbotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|url| !url.trim().is_empty());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/refbot.log".to_string());
        let crossref_api_url =
            env::var("CROSSREF_API_URL").unwrap_or_else(|_| DEFAULT_CROSSREF_URL.to_string());
        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let http_max_retries = env::var("HTTP_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2);
        let http_user_agent =
            env::var("HTTP_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            crossref_api_url,
            http_timeout_secs,
            http_max_retries,
            http_user_agent,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.crossref_api_url).is_err() {
            anyhow::bail!("CROSSREF_API_URL is not a valid URL: {}", self.crossref_api_url);
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    /// Telegram connection settings; fails when no token was configured.
    pub fn telegram_config(&self) -> Result<TelegramConfig> {
        let token = self
            .bot_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let mut telegram = TelegramConfig::with_token(token);
        telegram.telegram_api_url = self.telegram_api_url.clone();
        Ok(telegram)
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings::default()
            .with_timeout(Duration::from_secs(self.http_timeout_secs))
            .with_user_agent(self.http_user_agent.clone())
            .with_retry(RetryPolicy::default().with_max_retries(self.http_max_retries))
    }
}
