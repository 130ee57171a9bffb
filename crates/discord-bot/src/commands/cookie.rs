//! Cookie command - hands out a cookie.

use super::{CommandContext, CommandId};
use message_command::Response;
use rand::seq::SliceRandom;

const DESCRIPTIONS: &[&str] = &[
    "Here is your cookie.",
    "A cookie a day keeps the bugs away.",
    "Freshly baked, just for you.",
    "I saved the last one for you.",
    "Chocolate chips included.",
    "Do not tell the others, this one is special.",
];

pub(super) fn respond(context: &CommandContext) -> Response {
    let description = DESCRIPTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Cookie.");

    Response::rich(
        context
            .command_embed(CommandId::Cookie)
            .title("Cookie delivery!")
            .description(description)
            .footer(context.identity.footer("Cookie delivered")),
    )
}
