//! Discord gateway transport.

use crate::error::{AppError, AppResult};
use crate::identity::BotIdentity;
use crate::router::{ChannelKind, InboundMessage, Mentions, MessageAuthor, MessageRouter};
use async_trait::async_trait;
use message_command::{Response, RichContent};
use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::model::Timestamp;
use serenity::prelude::*;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};

pub struct DiscordHandler {
    router: Arc<MessageRouter>,
    identity: Arc<BotIdentity>,
    bot_user_id: OnceLock<UserId>,
}

impl DiscordHandler {
    pub fn new(router: Arc<MessageRouter>, identity: Arc<BotIdentity>) -> Self {
        Self {
            router,
            identity,
            bot_user_id: OnceLock::new(),
        }
    }

    fn inbound(&self, msg: &Message) -> InboundMessage {
        let bot_mentioned = self
            .bot_user_id
            .get()
            .is_some_and(|bot_id| msg.mentions.iter().any(|user| user.id == *bot_id));

        InboundMessage {
            id: msg.id.to_string(),
            content: msg.content.clone(),
            author: MessageAuthor {
                id: msg.author.id.to_string(),
                username: msg.author.name.clone(),
                bot: msg.author.bot,
            },
            channel: if msg.guild_id.is_some() {
                ChannelKind::Guild
            } else {
                ChannelKind::Direct
            },
            mentions: Mentions {
                everyone: msg.mention_everyone,
                bot: bot_mentioned,
            },
        }
    }

    async fn send(&self, ctx: &Context, msg: &Message, response: &Response) {
        debug!("[{}] sending message...", msg.id);

        match msg.channel_id.send_message(&ctx.http, create_message(response)).await {
            Ok(_) => info!("[{}] message sent", msg.id),
            Err(e) => error!("[{}] failed to send reply: {}", msg.id, e),
        }
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Authenticated as: \"{}\"", ready.user.tag());

        if self.bot_user_id.set(ready.user.id).is_err() {
            debug!("Reconnected, bot user id already known");
        }
        self.identity.set_discord_image_url(ready.user.avatar_url());
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let inbound = self.inbound(&msg);

        match self.router.route(&inbound) {
            Ok(response) => self.send(&ctx, &msg, &response).await,
            Err(AppError::Ignored(reason)) => debug!("[{}] message ignored: {}", msg.id, reason),
            Err(e) => {
                warn!("[{}] command failed: {}", msg.id, e);
                self.send(&ctx, &msg, &self.router.failure_response()).await;
            }
        }
    }
}

/// Connect to the gateway with the message intents the bot needs.
pub async fn build_client(token: &str, handler: DiscordHandler) -> AppResult<Client> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

pub fn create_message(response: &Response) -> CreateMessage {
    let mut message = CreateMessage::new();

    if !response.text.is_empty() {
        message = message.content(&response.text);
    }

    if let Some(rich) = &response.rich_content {
        message = message.embed(create_embed(rich));
    }

    message
}

fn create_embed(rich: &RichContent) -> CreateEmbed {
    let mut embed = CreateEmbed::new();

    if let Some(author) = &rich.author {
        let mut builder = CreateEmbedAuthor::new(&author.name);
        if let Some(icon_url) = &author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        if let Some(url) = &author.url {
            builder = builder.url(url);
        }
        embed = embed.author(builder);
    }

    if let Some(color) = rich.color {
        embed = embed.color(color);
    }

    if let Some(title) = &rich.title {
        embed = embed.title(title);
    }

    if let Some(description) = &rich.description {
        embed = embed.description(description);
    }

    for field in &rich.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(thumbnail) = &rich.thumbnail {
        embed = embed.thumbnail(&thumbnail.url);
    }

    if let Some(footer) = &rich.footer {
        let mut builder = CreateEmbedFooter::new(&footer.text);
        if let Some(icon_url) = &footer.icon_url {
            builder = builder.icon_url(icon_url);
        }
        embed = embed.footer(builder);
    }

    if let Some(timestamp) = rich.timestamp {
        embed = embed.timestamp(Timestamp::from(timestamp));
    }

    embed
}
