//! Error command - pretends to break the bot.

use super::{CommandContext, CommandId};
use message_command::Response;

pub(super) fn respond(context: &CommandContext) -> Response {
    Response::rich(
        context
            .command_embed(CommandId::Error)
            .title("Uh-oh. What just happened?")
            .description(
                "It seems that you have created a bug in my core system.\n\
                 Do not blame me if I crash, you asked for it!",
            )
            .field(
                "Found a real one?",
                format!(
                    "You can report it on the [issue tracker]({}/issues/new/choose).",
                    context.identity.repository_url()
                ),
                false,
            )
            .footer(context.identity.footer("Yes, I am sure")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_context;

    #[test]
    fn test_error_embed() {
        let context = test_context();
        let embed = respond(&context).rich_content.unwrap();
        let config = context.message_config.snapshot();

        assert_eq!(embed.title.as_deref(), Some("Uh-oh. What just happened?"));
        assert_eq!(embed.color, Some(config.command.error.image_color));
        assert!(embed.fields[0].value.contains("/issues/new/choose"));
        assert_eq!(embed.footer.map(|f| f.text).as_deref(), Some("Yes, I am sure"));
    }
}
