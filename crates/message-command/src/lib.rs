//! Prefix command recognition and dispatch.
//!
//! A message is a command when it starts with one of the configured prefixes
//! immediately followed by a command keyword (or one of its aliases),
//! case-insensitively, and the keyword either ends the message or is followed
//! by whitespace. The first registered command that matches handles the
//! message.

mod dispatcher;
mod matcher;
mod prefix;
mod registry;
mod types;

pub use dispatcher::Dispatcher;
pub use matcher::matches;
pub use prefix::{Prefix, PrefixSet, PrefixSource};
pub use registry::{CommandDefinition, CommandRegistry, Handler};
pub use types::*;
