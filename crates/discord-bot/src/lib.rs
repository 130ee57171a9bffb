//! Il est midi Discord bot.

pub mod app_state;
pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod identity;
pub mod message_config;
pub mod release;
pub mod router;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
