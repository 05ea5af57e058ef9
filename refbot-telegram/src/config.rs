//! Telegram connectivity: token and optional API URL (for a local Bot API server or a test double).
//! Loaded from BOT_TOKEN and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;
use tracing::error;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// BOT_TOKEN is required; the API URL is optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|url| !url.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Builds the teloxide bot. An unparsable API URL is logged and the default endpoint is used.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// **Test: with_token sets bot_token; no API URL.**
    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
    }

    /// **Test: from_env reads BOT_TOKEN and falls back to TELOXIDE_API_URL.**
    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var("BOT_TOKEN", "env_token");
        env::remove_var("TELEGRAM_API_URL");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));

        env::remove_var("BOT_TOKEN");
        env::remove_var("TELOXIDE_API_URL");
    }

    /// **Test: from_env fails without BOT_TOKEN.**
    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        env::remove_var("BOT_TOKEN");
        assert!(TelegramConfig::from_env().is_err());
    }

    /// **Test: build_bot applies a valid API URL and ignores an invalid one.**
    #[test]
    fn test_build_bot_api_url() {
        let mut config = TelegramConfig::with_token("123:abc".to_string());
        config.telegram_api_url = Some("http://localhost:8081/".to_string());
        assert_eq!(config.build_bot().api_url().as_str(), "http://localhost:8081/");

        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.build_bot().api_url().as_str().contains("api.telegram.org"));
    }
}
