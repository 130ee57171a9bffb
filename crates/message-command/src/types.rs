//! Message and response types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Message handed to the dispatcher by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessage {
    /// Transport message identifier, used for log context.
    pub id: String,
    /// Raw message text.
    pub content: String,
}

impl CommandMessage {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Reply produced by a command handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    /// Plain text, sent verbatim. May be empty when `rich_content` is set.
    pub text: String,
    /// Optional structured display payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_content: Option<RichContent>,
}

impl Response {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rich_content: None,
        }
    }

    pub fn rich(rich_content: RichContent) -> Self {
        Self {
            text: String::new(),
            rich_content: Some(rich_content),
        }
    }
}

/// Structured reply body. The transport decides how to render it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichContent {
    pub author: Option<RichAuthor>,
    pub color: Option<u32>,
    pub description: Option<String>,
    pub fields: Vec<RichField>,
    pub footer: Option<RichFooter>,
    pub thumbnail: Option<RichThumbnail>,
    pub timestamp: Option<DateTime<Utc>>,
    pub title: Option<String>,
}

impl RichContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(mut self, author: RichAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(RichField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: RichFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(RichThumbnail { url: url.into() });
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichAuthor {
    pub name: String,
    pub icon_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichThumbnail {
    pub url: String,
}
