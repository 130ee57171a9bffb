//! Version command - displays the running version and its release date.

use super::{CommandContext, CommandId};
use chrono::{DateTime, Utc};
use message_command::Response;

pub(super) fn respond(context: &CommandContext) -> Response {
    let info = context.app.info();
    let release_url = format!(
        "{}/releases/tag/{}",
        context.identity.repository_url(),
        info.version
    );

    let status = if info.production {
        "Running in production"
    } else {
        "Running in development"
    };

    let footer = match info.total_release_count {
        Some(count) => format!("{} versions released so far", count),
        None => "Born to serve".to_string(),
    };

    Response::rich(
        context
            .command_embed(CommandId::Version)
            .title("My birth certificate.")
            .field("My age", format!("[{}]({})", info.version, release_url), false)
            .field("My birthday", format_date(info.release_date), true)
            .field(
                "The last time I woke up",
                info.initialization_date
                    .format("%B %-d, %Y at %H:%M UTC")
                    .to_string(),
                true,
            )
            .field("My status", status, false)
            .footer(context.identity.footer(footer)),
    )
}

pub(super) fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_context;
    use chrono::TimeZone;

    #[test]
    fn test_version_embed_without_release() {
        let embed = respond(&test_context()).rich_content.unwrap();

        assert_eq!(embed.title.as_deref(), Some("My birth certificate."));
        assert_eq!(embed.fields.len(), 4);
        assert_eq!(
            embed.fields[0].value,
            "[1.4.0](https://github.com/Sonia-corporation/il-est-midi-discord/releases/tag/1.4.0)"
        );
        assert_eq!(embed.fields[1].value, "Unknown");
        assert_eq!(embed.fields[3].value, "Running in development");
        assert_eq!(embed.footer.map(|f| f.text).as_deref(), Some("Born to serve"));
    }

    #[test]
    fn test_version_embed_with_release() {
        let context = test_context();
        context.app.update_release(
            Utc.with_ymd_and_hms(2020, 6, 5, 10, 20, 30).unwrap(),
            String::new(),
        );
        context.app.update_total_release_count(12);

        let embed = respond(&context).rich_content.unwrap();
        assert_eq!(embed.fields[1].value, "June 5, 2020");
        assert_eq!(
            embed.footer.map(|f| f.text).as_deref(),
            Some("12 versions released so far")
        );
    }
}
