//! Il est midi Discord bot - Main entry point.

use anyhow::Context;
use discord_bot::app_state::AppState;
use discord_bot::commands::{build_dispatcher, CommandContext};
use discord_bot::config::Config;
use discord_bot::discord::{build_client, DiscordHandler};
use discord_bot::error::AppResult;
use discord_bot::identity::BotIdentity;
use discord_bot::message_config::MessageConfigStore;
use discord_bot::release::sync_release_metadata;
use discord_bot::router::MessageRouter;
use discord_bot::init_logging;
use github_client::GithubClient;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Il est midi Discord bot...");

    let message_config = Arc::new(MessageConfigStore::default());
    message_config.update_config(Some(config.message.clone()));

    let app = Arc::new(AppState::new(env!("CARGO_PKG_VERSION"), config.app.production));
    let identity = Arc::new(BotIdentity::new(&config.bot, &config.github));

    info!(
        "Version {} ({})",
        env!("CARGO_PKG_VERSION"),
        if config.app.production { "production" } else { "development" }
    );

    // Release metadata
    match &config.github.personal_access_token {
        Some(token) => {
            let github = GithubClient::new(
                token.expose_secret(),
                &config.github.api_url,
                config.github.timeout,
            )
            .context("Failed to create GitHub client")?;

            if let Err(e) = sync_release_metadata(
                &github,
                &app,
                &config.github.owner,
                &config.github.repository,
            )
            .await
            {
                error!("Failed to fetch release metadata: {}", e);
            }
        }
        None => warn!("No GitHub token configured - release metadata unavailable"),
    }

    // Commands
    let context = Arc::new(CommandContext::new(
        message_config.clone(),
        app.clone(),
        identity.clone(),
    ));
    let dispatcher = Arc::new(build_dispatcher(context.clone()));
    info!("Registered {} commands", dispatcher.registry().len());

    let router = Arc::new(MessageRouter::new(dispatcher, context, config.profile.clone()));
    let handler = DiscordHandler::new(router, identity);

    let mut client = build_client(config.discord.token.expose_secret(), handler).await?;
    let shard_manager = client.shard_manager.clone();

    #[cfg(unix)]
    spawn_reload_listener(message_config);

    info!("Listening for messages...");

    tokio::select! {
        result = client.start() => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Re-apply the message configuration on SIGHUP.
#[cfg(unix)]
fn spawn_reload_listener(message_config: Arc<MessageConfigStore>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(hangup) => hangup,
            Err(e) => {
                warn!("Configuration reload unavailable: {}", e);
                return;
            }
        };

        while hangup.recv().await.is_some() {
            info!("Reload signal received");
            match Config::load() {
                Ok(config) => message_config.update_config(Some(config.message)),
                Err(e) => error!("Failed to reload configuration: {:#}", e),
            }
        }
    });
}
