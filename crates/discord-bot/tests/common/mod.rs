//! Common test utilities for integration tests.

#![allow(dead_code)]

use discord_bot::app_state::AppState;
use discord_bot::commands::{build_dispatcher, CommandContext};
use discord_bot::config::{BotConfig, GithubConfig, ProfileConfig};
use discord_bot::identity::BotIdentity;
use discord_bot::message_config::MessageConfigStore;
use discord_bot::router::{ChannelKind, InboundMessage, Mentions, MessageAuthor, MessageRouter};
use github_client::GithubClient;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub struct TestBot {
    pub message_config: Arc<MessageConfigStore>,
    pub app: Arc<AppState>,
    pub router: MessageRouter,
}

/// Build the full command stack the way the binary does.
pub fn test_bot(version: &str, production: bool) -> TestBot {
    let message_config = Arc::new(MessageConfigStore::default());
    let app = Arc::new(AppState::new(version, production));
    let identity = Arc::new(BotIdentity::new(&BotConfig::default(), &GithubConfig::default()));

    let context = Arc::new(CommandContext::new(
        message_config.clone(),
        app.clone(),
        identity,
    ));
    let dispatcher = Arc::new(build_dispatcher(context.clone()));
    let router = MessageRouter::new(dispatcher, context, ProfileConfig::default());

    TestBot {
        message_config,
        app,
        router,
    }
}

pub fn guild_mention(content: &str) -> InboundMessage {
    InboundMessage {
        id: "123".into(),
        content: content.into(),
        author: MessageAuthor {
            id: "456".into(),
            username: "alice".into(),
            bot: false,
        },
        channel: ChannelKind::Guild,
        mentions: Mentions {
            everyone: false,
            bot: true,
        },
    }
}

/// Create a GitHub client configured for a mock server.
pub fn test_github_client(mock_server: &MockServer) -> GithubClient {
    GithubClient::new(
        "test-token",
        format!("{}/graphql", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}
