//! Decides which reply, if any, an inbound message gets.

use crate::commands::{BotDispatcher, CommandContext};
use crate::config::ProfileConfig;
use crate::error::AppResult;
use message_command::{CommandMessage, Response};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::debug;

/// User mentions (`<@id>` or `<@!id>`) opening a message, with the whitespace
/// after each of them.
static LEADING_MENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:<@!?\d+>\s*)+").expect("valid regex"));

/// Transport-neutral view of a received chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: String,
    pub content: String,
    pub author: MessageAuthor,
    pub channel: ChannelKind,
    pub mentions: Mentions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAuthor {
    pub id: String,
    pub username: String,
    pub bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Direct,
    Guild,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mentions {
    pub everyone: bool,
    pub bot: bool,
}

/// Why a message gets no reply.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredMessage {
    #[error("empty content")]
    EmptyContent,

    #[error("author is a bot")]
    BotAuthor,

    #[error("the bot is not mentioned")]
    NotMentioned,
}

pub struct MessageRouter {
    dispatcher: Arc<BotDispatcher>,
    context: Arc<CommandContext>,
    profile: ProfileConfig,
}

impl MessageRouter {
    pub fn new(
        dispatcher: Arc<BotDispatcher>,
        context: Arc<CommandContext>,
        profile: ProfileConfig,
    ) -> Self {
        Self {
            dispatcher,
            context,
            profile,
        }
    }

    /// Reply for the message, or `AppError::Ignored` when none is due.
    pub fn route(&self, message: &InboundMessage) -> AppResult<Response> {
        if message.content.is_empty() {
            return Err(IgnoredMessage::EmptyContent.into());
        }

        if message.author.bot {
            return Err(IgnoredMessage::BotAuthor.into());
        }

        match message.channel {
            ChannelKind::Direct => self.command_or_author_reply(message),
            ChannelKind::Guild if message.mentions.everyone => {
                debug!("[{}] everyone mention", message.id);
                Ok(Response::text(self.with_dev_prefix("Il est midi everyone!")))
            }
            ChannelKind::Guild if message.mentions.bot => self.command_or_author_reply(message),
            ChannelKind::Guild => Err(IgnoredMessage::NotMentioned.into()),
        }
    }

    /// Embed sent when a command fails to answer.
    pub fn failure_response(&self) -> Response {
        let config = self.context.message_config.snapshot();

        Response::rich(
            self.context
                .embed(&config.error)
                .title("Oops, something went wrong.")
                .description("I could not answer this one. The problem was logged.")
                .footer(self.context.identity.footer("Sorry for the inconvenience")),
        )
    }

    fn command_or_author_reply(&self, message: &InboundMessage) -> AppResult<Response> {
        let command = CommandMessage::new(
            message.id.clone(),
            command_content(&message.content),
        );

        if let Some(response) = self.dispatcher.dispatch(&command)? {
            return Ok(response);
        }

        debug!("[{}] author reply", message.id);
        Ok(Response::text(self.with_dev_prefix(&author_reply(&message.author))))
    }

    fn with_dev_prefix(&self, text: &str) -> String {
        if self.context.app.is_production() {
            return text.to_string();
        }

        match (&self.profile.discord_id, &self.profile.nickname) {
            (Some(id), _) => format!("**[dev - <@!{}>]** {}", id, text),
            (None, Some(nickname)) => format!("**[dev - {}]** {}", nickname, text),
            (None, None) => format!("**[dev]** {}", text),
        }
    }
}

/// Message text without the mentions addressing the bot, so that
/// `<@id> -help` reads as `-help`.
fn command_content(content: &str) -> &str {
    match LEADING_MENTIONS.find(content) {
        Some(mentions) => &content[mentions.end()..],
        None => content,
    }
}

fn author_reply(author: &MessageAuthor) -> String {
    if author.username.is_empty() {
        "Il est midi!".to_string()
    } else {
        format!("Il est midi <@!{}>!", author.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::commands::build_dispatcher;
    use crate::config::{BotConfig, GithubConfig};
    use crate::error::AppError;
    use crate::identity::BotIdentity;
    use crate::message_config::MessageConfigStore;

    fn test_router(production: bool, profile: ProfileConfig) -> MessageRouter {
        let context = Arc::new(CommandContext::new(
            Arc::new(MessageConfigStore::default()),
            Arc::new(AppState::new("1.4.0", production)),
            Arc::new(BotIdentity::new(&BotConfig::default(), &GithubConfig::default())),
        ));
        let dispatcher = Arc::new(build_dispatcher(context.clone()));
        MessageRouter::new(dispatcher, context, profile)
    }

    fn message(content: &str, channel: ChannelKind, mentions: Mentions) -> InboundMessage {
        InboundMessage {
            id: "m1".into(),
            content: content.into(),
            author: MessageAuthor {
                id: "42".into(),
                username: "alice".into(),
                bot: false,
            },
            channel,
            mentions,
        }
    }

    fn ignored(result: AppResult<Response>) -> Option<IgnoredMessage> {
        match result {
            Err(AppError::Ignored(reason)) => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn test_empty_content_ignored() {
        let router = test_router(true, ProfileConfig::default());
        let result = router.route(&message("", ChannelKind::Direct, Mentions::default()));
        assert_eq!(ignored(result), Some(IgnoredMessage::EmptyContent));
    }

    #[test]
    fn test_bot_author_ignored() {
        let router = test_router(true, ProfileConfig::default());
        let mut msg = message("-help", ChannelKind::Direct, Mentions::default());
        msg.author.bot = true;
        assert_eq!(ignored(router.route(&msg)), Some(IgnoredMessage::BotAuthor));
    }

    #[test]
    fn test_guild_without_mention_ignored() {
        let router = test_router(true, ProfileConfig::default());
        let result = router.route(&message("-help", ChannelKind::Guild, Mentions::default()));
        assert_eq!(ignored(result), Some(IgnoredMessage::NotMentioned));
    }

    #[test]
    fn test_everyone_mention() {
        let router = test_router(true, ProfileConfig::default());
        let mentions = Mentions {
            everyone: true,
            bot: true,
        };
        let response = router
            .route(&message("-help", ChannelKind::Guild, mentions))
            .unwrap();
        assert_eq!(response, Response::text("Il est midi everyone!"));
    }

    #[test]
    fn test_direct_message_command() {
        let router = test_router(true, ProfileConfig::default());
        let response = router
            .route(&message("!HELP me", ChannelKind::Direct, Mentions::default()))
            .unwrap();
        assert!(response.rich_content.is_some());
    }

    #[test]
    fn test_mention_with_command() {
        let router = test_router(true, ProfileConfig::default());
        let mentions = Mentions {
            everyone: false,
            bot: true,
        };
        let response = router
            .route(&message("-lunch", ChannelKind::Guild, mentions))
            .unwrap();
        assert_eq!(
            response.rich_content.and_then(|r| r.footer).map(|f| f.text).as_deref(),
            Some("Bon appétit")
        );
    }

    #[test]
    fn test_mention_token_before_command() {
        let router = test_router(true, ProfileConfig::default());
        let mentions = Mentions {
            everyone: false,
            bot: true,
        };

        for content in ["<@999> -help", "<@!999>   !H", "<@999><@!12> $help me"] {
            let response = router
                .route(&message(content, ChannelKind::Guild, mentions))
                .unwrap();
            assert_eq!(
                response.rich_content.and_then(|r| r.footer).map(|f| f.text).as_deref(),
                Some("At your service"),
                "{}",
                content
            );
        }
    }

    #[test]
    fn test_mention_token_without_command() {
        let router = test_router(true, ProfileConfig::default());
        let mentions = Mentions {
            everyone: false,
            bot: true,
        };

        for content in ["<@999>", "<@999> hello -help", "<@999> -helpme"] {
            let response = router
                .route(&message(content, ChannelKind::Guild, mentions))
                .unwrap();
            assert_eq!(response, Response::text("Il est midi <@!42>!"), "{}", content);
        }
    }

    #[test]
    fn test_command_content() {
        assert_eq!(command_content("<@999> -help"), "-help");
        assert_eq!(command_content("<@!999>\t-help x"), "-help x");
        assert_eq!(command_content("<@999><@!1> -v"), "-v");
        assert_eq!(command_content("-help <@999>"), "-help <@999>");
        assert_eq!(command_content("<@&5> -help"), "<@&5> -help");
        assert_eq!(command_content("<#5> -help"), "<#5> -help");
        assert_eq!(command_content(""), "");
    }

    #[test]
    fn test_mention_without_command() {
        let router = test_router(true, ProfileConfig::default());
        let mentions = Mentions {
            everyone: false,
            bot: true,
        };
        let response = router
            .route(&message("hello there", ChannelKind::Guild, mentions))
            .unwrap();
        assert_eq!(response, Response::text("Il est midi <@!42>!"));
    }

    #[test]
    fn test_author_without_username() {
        let router = test_router(true, ProfileConfig::default());
        let mut msg = message("hello", ChannelKind::Direct, Mentions::default());
        msg.author.username = String::new();
        assert_eq!(router.route(&msg).unwrap(), Response::text("Il est midi!"));
    }

    #[test]
    fn test_dev_prefix() {
        let profile = ProfileConfig {
            discord_id: Some("7".into()),
            nickname: Some("dev".into()),
        };
        let router = test_router(false, profile);
        let response = router
            .route(&message("hello", ChannelKind::Direct, Mentions::default()))
            .unwrap();
        assert_eq!(response.text, "**[dev - <@!7>]** Il est midi <@!42>!");

        let router = test_router(
            false,
            ProfileConfig {
                discord_id: None,
                nickname: Some("C0ZEN".into()),
            },
        );
        let mentions = Mentions {
            everyone: true,
            bot: false,
        };
        let response = router
            .route(&message("hi all", ChannelKind::Guild, mentions))
            .unwrap();
        assert_eq!(response.text, "**[dev - C0ZEN]** Il est midi everyone!");
    }

    #[test]
    fn test_dev_prefix_not_on_commands() {
        let router = test_router(false, ProfileConfig::default());
        let response = router
            .route(&message("-cookie", ChannelKind::Direct, Mentions::default()))
            .unwrap();
        assert_eq!(response.text, "");
    }

    #[test]
    fn test_failure_response() {
        let router = test_router(true, ProfileConfig::default());
        let embed = router.failure_response().rich_content.unwrap();
        let config = MessageConfigStore::default().snapshot();
        assert_eq!(embed.color, Some(config.error.image_color));
    }
}
