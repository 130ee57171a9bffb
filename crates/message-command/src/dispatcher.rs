//! First-match-wins command dispatch.

use crate::prefix::{PrefixSet, PrefixSource};
use crate::registry::{CommandDefinition, CommandRegistry};
use crate::types::{CommandMessage, Response};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Routes messages to the first matching command of a fixed registry.
///
/// Holds no mutable state. The prefix configuration is read from the source
/// once at the start of every call, so a reconfiguration takes effect on the
/// next message.
pub struct Dispatcher<K, E> {
    registry: CommandRegistry<K, E>,
    prefixes: Arc<dyn PrefixSource>,
}

impl<K: fmt::Debug, E> Dispatcher<K, E> {
    pub fn new(registry: CommandRegistry<K, E>, prefixes: Arc<dyn PrefixSource>) -> Self {
        Self { registry, prefixes }
    }

    pub fn registry(&self) -> &CommandRegistry<K, E> {
        &self.registry
    }

    /// Prefix set currently in effect.
    pub fn current_prefixes(&self) -> PrefixSet {
        PrefixSet::resolve(self.prefixes.current_prefix().as_ref())
    }

    /// Whether any registered command matches the message.
    pub fn has_command(&self, content: &str) -> bool {
        self.find(content).is_some()
    }

    /// Tag of the command that would handle the message, if any.
    pub fn matching_command(&self, content: &str) -> Option<&K> {
        self.find(content).map(CommandDefinition::id)
    }

    /// Invoke the first matching handler.
    ///
    /// Returns `Ok(None)` without calling anything when the message is empty
    /// or nothing matches. Handler errors are returned unchanged.
    pub fn dispatch(&self, message: &CommandMessage) -> Result<Option<Response>, E> {
        let Some(definition) = self.find(&message.content) else {
            return Ok(None);
        };

        debug!("[{}] {:?} command detected", message.id, definition.id());
        definition.handle(message).map(Some)
    }

    fn find(&self, content: &str) -> Option<&CommandDefinition<K, E>> {
        if content.is_empty() {
            return None;
        }

        let prefixes = self.current_prefixes();
        self.registry.find(content, &prefixes)
    }
}
