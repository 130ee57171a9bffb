//! Bot and corporation identity used on embeds.

use crate::config::{BotConfig, GithubConfig};
use message_command::{RichAuthor, RichFooter};
use std::sync::{PoisonError, RwLock};

#[derive(Debug)]
pub struct BotIdentity {
    corporation_name: String,
    corporation_image_url: String,
    corporation_url: String,
    repository_url: String,
    configured_image_url: Option<String>,
    discord_image_url: RwLock<Option<String>>,
}

impl BotIdentity {
    pub fn new(bot: &BotConfig, github: &GithubConfig) -> Self {
        Self {
            corporation_name: bot.corporation_name.clone(),
            corporation_image_url: bot.corporation_image_url.clone(),
            corporation_url: bot.corporation_url.clone(),
            repository_url: github.repository_url(),
            configured_image_url: bot.image_url.clone(),
            discord_image_url: RwLock::new(None),
        }
    }

    /// Embed author shared by every reply.
    pub fn corporation_author(&self) -> RichAuthor {
        RichAuthor {
            name: self.corporation_name.clone(),
            icon_url: Some(self.corporation_image_url.clone()),
            url: Some(self.corporation_url.clone()),
        }
    }

    /// Bot avatar: the configured one, else the Discord one once known.
    pub fn image_url(&self) -> Option<String> {
        self.configured_image_url.clone().or_else(|| {
            self.discord_image_url
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    pub fn set_discord_image_url(&self, image_url: Option<String>) {
        *self
            .discord_image_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = image_url;
    }

    /// Footer carrying the bot avatar.
    pub fn footer(&self, text: impl Into<String>) -> RichFooter {
        RichFooter {
            text: text.into(),
            icon_url: self.image_url(),
        }
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }
}
