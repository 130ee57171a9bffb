//! Prefix + keyword matching.

use crate::prefix::PrefixSet;

/// Check whether `message` starts with one of `prefixes` immediately followed
/// by one of `keywords`, case-insensitively.
///
/// The keyword must end the message or be followed by whitespace, so `-helped`
/// does not match `help`. Prefixes are literal text.
pub fn matches<S: AsRef<str>>(message: &str, prefixes: &PrefixSet, keywords: &[S]) -> bool {
    if prefixes.is_empty() || message.is_empty() {
        return false;
    }

    let message = message.to_lowercase();
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    prefixes.iter().any(|prefix| {
        keywords
            .iter()
            .any(|keyword| starts_with_command(&message, prefix, keyword))
    })
}

/// `message`, `prefix` and `keyword` are already lower-cased.
fn starts_with_command(message: &str, prefix: &str, keyword: &str) -> bool {
    let Some(rest) = message
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(keyword))
    else {
        return false;
    };

    rest.chars().next().map_or(true, char::is_whitespace)
}
