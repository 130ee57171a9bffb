//! Feature command - explains how to change the bot behavior.

use super::{CommandContext, CommandId};
use message_command::Response;

pub(super) fn respond(context: &CommandContext) -> Response {
    let repository_url = context.identity.repository_url();

    Response::rich(
        context
            .command_embed(CommandId::Feature)
            .title("So, you want to change my behavior?")
            .description(
                "Features can not be toggled per guild yet.\n\
                 Tell me what you would like and I will do my best.",
            )
            .field(
                "Request a feature",
                format!(
                    "Open a feature request on the [issue tracker]({}/issues/new/choose).",
                    repository_url
                ),
                false,
            )
            .field(
                "Contribute",
                format!("Pull requests are welcome on [GitHub]({}).", repository_url),
                false,
            )
            .footer(context.identity.footer("Help me to be better")),
    )
}
