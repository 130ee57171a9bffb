//! Release notes command - shows what changed in the running version.

use super::version::format_date;
use super::{CommandContext, CommandId};
use message_command::Response;

/// Discord embed descriptions are capped at 4096 characters.
const MAX_DESCRIPTION_CHARS: usize = 4096;

pub(super) fn respond(context: &CommandContext) -> Response {
    let info = context.app.info();

    let notes = match info.release_notes.as_deref() {
        Some(notes) if !notes.is_empty() => truncate(notes, MAX_DESCRIPTION_CHARS),
        _ => "I do not know what changed in this version yet.".to_string(),
    };

    let footer = match info.total_release_count {
        Some(count) => format!("Release {} of {}", info.version, count),
        None => format!("Release {}", info.version),
    };

    Response::rich(
        context
            .command_embed(CommandId::ReleaseNotes)
            .title(format!(
                "{} release notes - {}",
                info.version,
                format_date(info.release_date)
            ))
            .description(notes)
            .field(
                "Full changelog",
                format!(
                    "[Read it on GitHub]({}/releases/tag/{})",
                    context.identity.repository_url(),
                    info.version
                ),
                false,
            )
            .footer(context.identity.footer(footer)),
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
