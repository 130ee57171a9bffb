//! Mutable message configuration: prefixes and per-command embed images.

use message_command::{Prefix, PrefixSource};
use serde::Deserialize;
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

/// Image shown on every embed unless overridden.
pub const DEFAULT_IMAGE_URL: &str = "https://i.ibb.co/ph17BqP/icons8-artificial-intelligence-512.png";

/// Embed color and thumbnail of one reply kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub image_color: u32,
    pub image_url: String,
}

impl ImageConfig {
    fn new(image_color: u32) -> Self {
        Self {
            image_color,
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub prefix: Prefix,
    pub cookie: ImageConfig,
    pub error: ImageConfig,
    pub feature: ImageConfig,
    pub help: ImageConfig,
    pub lunch: ImageConfig,
    pub release_notes: ImageConfig,
    pub version: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageConfig {
    pub command: CommandConfig,
    /// Used when a command fails to answer.
    pub error: ImageConfig,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            command: CommandConfig {
                prefix: Prefix::from(vec!["-", "!", "$"]),
                cookie: ImageConfig::new(15_766_394),
                error: ImageConfig::new(15_684_432),
                feature: ImageConfig::new(13_991_787),
                help: ImageConfig::new(11_912_416),
                lunch: ImageConfig::new(16_754_470),
                release_notes: ImageConfig::new(7_180_766),
                version: ImageConfig::new(11_912_416),
            },
            error: ImageConfig::new(15_684_432),
        }
    }
}

/// Image update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialImageConfig {
    #[serde(default)]
    pub image_color: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialCommandConfig {
    #[serde(default)]
    pub prefix: Option<Prefix>,
    #[serde(default)]
    pub cookie: Option<PartialImageConfig>,
    #[serde(default)]
    pub error: Option<PartialImageConfig>,
    #[serde(default)]
    pub feature: Option<PartialImageConfig>,
    #[serde(default)]
    pub help: Option<PartialImageConfig>,
    #[serde(default)]
    pub lunch: Option<PartialImageConfig>,
    #[serde(default)]
    pub release_notes: Option<PartialImageConfig>,
    #[serde(default)]
    pub version: Option<PartialImageConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialMessageConfig {
    #[serde(default)]
    pub command: Option<PartialCommandConfig>,
    #[serde(default)]
    pub error: Option<PartialImageConfig>,
}

/// Shared message configuration, read on every message and updated at
/// startup or reload.
#[derive(Debug, Default)]
pub struct MessageConfigStore {
    config: RwLock<MessageConfig>,
}

impl MessageConfigStore {
    pub fn new(config: MessageConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> MessageConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply an update field by field, logging every change.
    pub fn update_config(&self, update: Option<PartialMessageConfig>) {
        let Some(update) = update else {
            return;
        };

        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(command) = update.command {
            update_command(&mut config.command, command);
        }
        update_image("message error", &mut config.error, update.error);
    }
}

impl PrefixSource for MessageConfigStore {
    fn current_prefix(&self) -> Option<Prefix> {
        let config = self.config.read().unwrap_or_else(PoisonError::into_inner);
        Some(config.command.prefix.clone())
    }
}

fn update_command(config: &mut CommandConfig, update: PartialCommandConfig) {
    if let Some(prefix) = update.prefix {
        if prefix.is_usable() {
            info!("message command prefix updated: {} -> {}", config.prefix, prefix);
            config.prefix = prefix;
        } else {
            warn!("message command prefix update ignored: {} has no usable prefix", prefix);
        }
    }

    update_image("message command cookie", &mut config.cookie, update.cookie);
    update_image("message command error", &mut config.error, update.error);
    update_image("message command feature", &mut config.feature, update.feature);
    update_image("message command help", &mut config.help, update.help);
    update_image("message command lunch", &mut config.lunch, update.lunch);
    update_image(
        "message command release notes",
        &mut config.release_notes,
        update.release_notes,
    );
    update_image("message command version", &mut config.version, update.version);
}

fn update_image(name: &str, config: &mut ImageConfig, update: Option<PartialImageConfig>) {
    let Some(update) = update else {
        return;
    };

    if let Some(image_color) = update.image_color {
        info!(
            "{} image color updated: {} -> {}",
            name, config.image_color, image_color
        );
        config.image_color = image_color;
    }

    if let Some(image_url) = update.image_url {
        info!(
            "{} image url updated: \"{}\" -> \"{}\"",
            name, config.image_url, image_url
        );
        config.image_url = image_url;
    }
}
