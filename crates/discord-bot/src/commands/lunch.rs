//! Lunch command - it is time to eat.

use super::{CommandContext, CommandId};
use message_command::Response;
use rand::seq::SliceRandom;

const TITLES: &[&str] = &[
    "Time to eat!",
    "Lunch time!",
    "It is noon!",
    "Food is ready!",
];

const DESCRIPTIONS: &[&str] = &[
    "I was starving.",
    "Cool.",
    "Finally.",
    "My stomach was waiting for this message.",
    "Do not forget to drink some water.",
];

pub(super) fn respond(context: &CommandContext) -> Response {
    let mut rng = rand::thread_rng();
    let title = TITLES.choose(&mut rng).copied().unwrap_or("Lunch time!");
    let description = DESCRIPTIONS.choose(&mut rng).copied().unwrap_or("Cool.");

    Response::rich(
        context
            .command_embed(CommandId::Lunch)
            .title(title)
            .description(description)
            .footer(context.identity.footer("Bon appétit")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_context;

    #[test]
    fn test_lunch_embed() {
        let embed = respond(&test_context()).rich_content.unwrap();

        assert!(TITLES.contains(&embed.title.as_deref().unwrap()));
        assert!(DESCRIPTIONS.contains(&embed.description.as_deref().unwrap()));
        assert_eq!(embed.footer.map(|f| f.text).as_deref(), Some("Bon appétit"));
    }
}
