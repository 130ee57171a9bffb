//! Ordered registry of command definitions.

use crate::matcher;
use crate::prefix::PrefixSet;
use crate::types::{CommandMessage, Response};
use std::fmt;

/// Handler invoked when a definition matches.
pub type Handler<E> = Box<dyn Fn(&CommandMessage) -> Result<Response, E> + Send + Sync>;

/// One command: tag, primary keyword, shortcut aliases and handler.
pub struct CommandDefinition<K, E> {
    id: K,
    keywords: Vec<String>,
    handler: Handler<E>,
}

impl<K, E> CommandDefinition<K, E> {
    /// Create a definition. Keywords are stored lower-cased; the primary
    /// keyword comes first.
    pub fn new<F>(id: K, keyword: &str, aliases: &[&str], handler: F) -> Self
    where
        F: Fn(&CommandMessage) -> Result<Response, E> + Send + Sync + 'static,
    {
        let keywords = std::iter::once(keyword)
            .chain(aliases.iter().copied())
            .map(str::to_lowercase)
            .collect();

        Self {
            id,
            keywords,
            handler: Box::new(handler),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn keyword(&self) -> &str {
        &self.keywords[0]
    }

    pub fn aliases(&self) -> &[String] {
        &self.keywords[1..]
    }

    /// Primary keyword followed by aliases.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, message: &str, prefixes: &PrefixSet) -> bool {
        matcher::matches(message, prefixes, &self.keywords)
    }

    pub fn handle(&self, message: &CommandMessage) -> Result<Response, E> {
        (self.handler)(message)
    }
}

impl<K: fmt::Debug, E> fmt::Debug for CommandDefinition<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("id", &self.id)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// Fixed, ordered list of command definitions. Order is match priority.
pub struct CommandRegistry<K, E> {
    definitions: Vec<CommandDefinition<K, E>>,
}

impl<K, E> CommandRegistry<K, E> {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Append a definition at the lowest priority.
    pub fn with(mut self, definition: CommandDefinition<K, E>) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn all_definitions(&self) -> &[CommandDefinition<K, E>] {
        &self.definitions
    }

    /// First definition, in registration order, matching the message.
    pub fn find(&self, message: &str, prefixes: &PrefixSet) -> Option<&CommandDefinition<K, E>> {
        self.definitions
            .iter()
            .find(|definition| definition.matches(message, prefixes))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<K, E> Default for CommandRegistry<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, E> fmt::Debug for CommandRegistry<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.definitions).finish()
    }
}
