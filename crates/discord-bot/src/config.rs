//! Application configuration loaded from an optional file and the environment.

use crate::message_config::PartialMessageConfig;
use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Configuration file looked up when `BOT_CONFIG_FILE` is not set. Any
/// extension the `config` crate understands works (`bot.toml`, `bot.json`...).
pub const DEFAULT_CONFIG_FILE: &str = "config/bot";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord configuration
    pub discord: DiscordConfig,

    /// Bot identity and logging
    #[serde(default)]
    pub bot: BotConfig,

    /// Application runtime flags
    #[serde(default)]
    pub app: AppConfig,

    /// Developer profile, used to tag replies outside production
    #[serde(default)]
    pub profile: ProfileConfig,

    /// GitHub release metadata source
    #[serde(default)]
    pub github: GithubConfig,

    /// Overrides applied to the default message configuration
    #[serde(default)]
    pub message: PartialMessageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Bot token
    pub token: SecretString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Avatar shown in reply footers. Falls back to the Discord avatar.
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default = "default_corporation_name")]
    pub corporation_name: String,

    #[serde(default = "default_corporation_image_url")]
    pub corporation_image_url: String,

    #[serde(default = "default_corporation_url")]
    pub corporation_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Production mode (no development prefix on replies)
    #[serde(default)]
    pub production: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    /// Discord user id of the developer running this instance
    #[serde(default)]
    pub discord_id: Option<String>,

    /// Nickname used when no Discord id is configured
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// Personal access token. Release metadata is skipped without one.
    #[serde(default)]
    pub personal_access_token: Option<SecretString>,

    /// GraphQL endpoint
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    #[serde(default = "default_github_owner")]
    pub owner: String,

    #[serde(default = "default_github_repository")]
    pub repository: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl GithubConfig {
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repository)
    }
}

// Default implementations
impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            image_url: None,
            corporation_name: default_corporation_name(),
            corporation_image_url: default_corporation_image_url(),
            corporation_url: default_corporation_url(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            personal_access_token: None,
            api_url: default_github_api_url(),
            owner: default_github_owner(),
            repository: default_github_repository(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".into()
}

fn default_corporation_name() -> String {
    "Sonia corporation".into()
}

fn default_corporation_image_url() -> String {
    "https://i.ibb.co/XSB6Vng/icons8-girl-1024.png".into()
}

fn default_corporation_url() -> String {
    "https://github.com/Sonia-corporation?type=source".into()
}

fn default_github_api_url() -> String {
    github_client::GITHUB_API_URL.into()
}

fn default_github_owner() -> String {
    "Sonia-corporation".into()
}

fn default_github_repository() -> String {
    "il-est-midi-discord".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Config {
    /// Load configuration from `.env`, the configuration file and the
    /// environment, in increasing priority.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let file = std::env::var("BOT_CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::load_from(&file)
    }

    /// Load configuration from the given file (optional) and the environment.
    pub fn load_from(file: &str) -> Result<Self> {
        Self::build(file, None)
    }

    /// Load configuration from the given file (optional) and `vars` in place
    /// of the process environment.
    pub fn load_from_vars(file: &str, vars: config::Map<String, String>) -> Result<Self> {
        Self::build(file, Some(vars))
    }

    fn build(file: &str, vars: Option<config::Map<String, String>>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    // MESSAGE__COMMAND__PREFIX="-,!,$"
                    .list_separator(",")
                    .with_list_parse_key("message.command.prefix")
                    .source(vars),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
