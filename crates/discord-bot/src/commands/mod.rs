//! Bot commands.

mod cookie;
mod error;
mod feature;
mod help;
mod lunch;
mod release_notes;
mod version;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::identity::BotIdentity;
use crate::message_config::{CommandConfig, ImageConfig, MessageConfigStore};
use chrono::Utc;
use message_command::{
    CommandDefinition, CommandRegistry, Dispatcher, PrefixSource, Response, RichContent,
};
use std::sync::Arc;

/// Dispatcher over the bot commands.
pub type BotDispatcher = Dispatcher<CommandId, AppError>;

/// Commands in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Version,
    Error,
    Help,
    Cookie,
    Lunch,
    ReleaseNotes,
    Feature,
}

impl CommandId {
    pub const ALL: [CommandId; 7] = [
        CommandId::Version,
        CommandId::Error,
        CommandId::Help,
        CommandId::Cookie,
        CommandId::Lunch,
        CommandId::ReleaseNotes,
        CommandId::Feature,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CommandId::Version => "version",
            CommandId::Error => "error",
            CommandId::Help => "help",
            CommandId::Cookie => "cookie",
            CommandId::Lunch => "lunch",
            CommandId::ReleaseNotes => "release-notes",
            CommandId::Feature => "feature",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CommandId::Version => &["v"],
            CommandId::Error => &["bug"],
            CommandId::Help => &["h"],
            CommandId::Cookie => &["cookies", "c"],
            CommandId::Lunch => &["l"],
            CommandId::ReleaseNotes => &["r"],
            CommandId::Feature => &["f"],
        }
    }

    /// Name shown in the help listing.
    pub fn label(self) -> &'static str {
        match self {
            CommandId::Version => "Version",
            CommandId::Error => "Error",
            CommandId::Help => "Help",
            CommandId::Cookie => "Cookie",
            CommandId::Lunch => "Lunch",
            CommandId::ReleaseNotes => "Release notes",
            CommandId::Feature => "Feature",
        }
    }

    /// One-line description shown in the help listing.
    pub fn summary(self) -> &'static str {
        match self {
            CommandId::Version => "Display my current application version.",
            CommandId::Error => "Create a bug in my core system. Do not do this one, of course!",
            CommandId::Help => "Ask for my help, it is obvious! And maybe I will, who knows?",
            CommandId::Cookie => {
                "Because I am good, life gave me cookies. Now it is my turn to give you some."
            }
            CommandId::Lunch => "There is a time to eat.",
            CommandId::ReleaseNotes => "Display the last version release notes.",
            CommandId::Feature => "Change my behavior on this guild. Help me to be better!",
        }
    }

    pub fn image(self, config: &CommandConfig) -> &ImageConfig {
        match self {
            CommandId::Version => &config.version,
            CommandId::Error => &config.error,
            CommandId::Help => &config.help,
            CommandId::Cookie => &config.cookie,
            CommandId::Lunch => &config.lunch,
            CommandId::ReleaseNotes => &config.release_notes,
            CommandId::Feature => &config.feature,
        }
    }

    pub fn respond(self, context: &CommandContext) -> Response {
        match self {
            CommandId::Version => version::respond(context),
            CommandId::Error => error::respond(context),
            CommandId::Help => help::respond(context),
            CommandId::Cookie => cookie::respond(context),
            CommandId::Lunch => lunch::respond(context),
            CommandId::ReleaseNotes => release_notes::respond(context),
            CommandId::Feature => feature::respond(context),
        }
    }
}

/// Shared state the command handlers read.
#[derive(Debug)]
pub struct CommandContext {
    pub message_config: Arc<MessageConfigStore>,
    pub app: Arc<AppState>,
    pub identity: Arc<BotIdentity>,
}

impl CommandContext {
    pub fn new(
        message_config: Arc<MessageConfigStore>,
        app: Arc<AppState>,
        identity: Arc<BotIdentity>,
    ) -> Self {
        Self {
            message_config,
            app,
            identity,
        }
    }

    /// Embed with the corporation author, the image color and thumbnail, and
    /// the current time.
    pub fn embed(&self, image: &ImageConfig) -> RichContent {
        RichContent::new()
            .author(self.identity.corporation_author())
            .color(image.image_color)
            .thumbnail(image.image_url.clone())
            .timestamp(Utc::now())
    }

    /// Embed for the given command, using its current image configuration.
    fn command_embed(&self, command: CommandId) -> RichContent {
        let config = self.message_config.snapshot();
        self.embed(command.image(&config.command))
    }
}

/// Build the registry of every command, in priority order.
pub fn build_registry(context: Arc<CommandContext>) -> CommandRegistry<CommandId, AppError> {
    CommandId::ALL
        .into_iter()
        .fold(CommandRegistry::new(), |registry, command| {
            let context = context.clone();
            registry.with(CommandDefinition::new(
                command,
                command.keyword(),
                command.aliases(),
                move |_message| Ok(command.respond(&context)),
            ))
        })
}

/// Build a dispatcher reading prefixes from the message configuration.
pub fn build_dispatcher(context: Arc<CommandContext>) -> BotDispatcher {
    let prefixes: Arc<dyn PrefixSource> = context.message_config.clone();
    Dispatcher::new(build_registry(context), prefixes)
}
