//! Command prefix configuration and resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Configured command prefix: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prefix {
    One(String),
    Many(Vec<String>),
}

impl Prefix {
    /// Whether this configuration yields at least one usable prefix.
    pub fn is_usable(&self) -> bool {
        !PrefixSet::resolve(Some(self)).is_empty()
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Prefix {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for Prefix {
    fn from(values: Vec<S>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(prefix) => write!(f, "\"{}\"", prefix),
            Self::Many(prefixes) => {
                let quoted: Vec<String> = prefixes.iter().map(|p| format!("\"{}\"", p)).collect();
                write!(f, "[ {} ]", quoted.join(", "))
            }
        }
    }
}

/// Canonical set of lower-cased, non-empty prefixes.
///
/// Iteration order is not meaningful: every prefix is tried for every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSet(BTreeSet<String>);

impl PrefixSet {
    /// Resolve a prefix configuration. Absent or empty configuration resolves
    /// to the empty set, so nothing can match.
    pub fn resolve(prefix: Option<&Prefix>) -> Self {
        let prefixes = match prefix {
            None => BTreeSet::new(),
            Some(Prefix::One(p)) => std::iter::once(p).filter_map(normalize).collect(),
            Some(Prefix::Many(ps)) => ps.iter().filter_map(normalize).collect(),
        };

        Self(prefixes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains(&prefix.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn normalize(prefix: &String) -> Option<String> {
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_lowercase())
    }
}

/// Source of the current prefix configuration.
///
/// Implementations must be cheap to read: the dispatcher reads the source once
/// per call, never caching the value between calls.
#[cfg_attr(test, mockall::automock)]
pub trait PrefixSource: Send + Sync {
    fn current_prefix(&self) -> Option<Prefix>;
}

impl PrefixSource for Prefix {
    fn current_prefix(&self) -> Option<Prefix> {
        Some(self.clone())
    }
}

impl PrefixSource for Option<Prefix> {
    fn current_prefix(&self) -> Option<Prefix> {
        self.clone()
    }
}
