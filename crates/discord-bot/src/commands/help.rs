//! Help command - lists every command and the usable prefixes.

use super::{CommandContext, CommandId};
use message_command::{Prefix, Response};

/// Commands in the order the help lists them.
const LISTED: [CommandId; 7] = [
    CommandId::Cookie,
    CommandId::Error,
    CommandId::Feature,
    CommandId::Help,
    CommandId::Lunch,
    CommandId::ReleaseNotes,
    CommandId::Version,
];

pub(super) fn respond(context: &CommandContext) -> Response {
    let config = context.message_config.snapshot();

    let mut embed = context
        .embed(CommandId::Help.image(&config.command))
        .title("So, you need my help? Cool.")
        .description(format!(
            "Below is the complete list of commands.\n{}",
            prefix_sentence(&config.command.prefix)
        ));

    for command in LISTED {
        embed = embed.field(field_name(command), command.summary(), false);
    }

    let embed = embed
        .field(
            "Further help",
            format!(
                "You can also checkout the [readme]({}/blob/master/README.md).\n\
                 It contains more information about how I work.",
                context.identity.repository_url()
            ),
            false,
        )
        .footer(context.identity.footer("At your service"));

    Response::rich(embed)
}

fn field_name(command: CommandId) -> String {
    let keywords: Vec<&str> = std::iter::once(command.keyword())
        .chain(command.aliases().iter().copied())
        .collect();
    format!("{} ({})", command.label(), emphasized_list(&keywords))
}

fn prefix_sentence(prefix: &Prefix) -> String {
    let prefixes: Vec<&str> = match prefix {
        Prefix::One(p) => vec![p.as_str()],
        Prefix::Many(ps) => ps.iter().map(String::as_str).collect(),
    };
    let prefixes: Vec<&str> = prefixes.into_iter().filter(|p| !p.is_empty()).collect();

    if prefixes.len() > 1 {
        format!(
            "You can either use {} as prefix to run a command.",
            emphasized_list(&prefixes)
        )
    } else {
        format!(
            "You can use {} as prefix to run a command.",
            emphasized_list(&prefixes)
        )
    }
}

/// `*a*`, `*a* or *b*`, `*a*, *b* or *c*`.
fn emphasized_list(items: &[&str]) -> String {
    let emphasized: Vec<String> = items.iter().map(|item| format!("*{}*", item)).collect();

    match emphasized.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_context;
    use crate::message_config::{PartialCommandConfig, PartialMessageConfig};

    #[test]
    fn test_help_embed() {
        let response = respond(&test_context());
        assert_eq!(response.text, "");

        let embed = response.rich_content.unwrap();
        assert_eq!(embed.title.as_deref(), Some("So, you need my help? Cool."));
        assert_eq!(
            embed.description.as_deref(),
            Some(
                "Below is the complete list of commands.\n\
                 You can either use *-*, *!* or *$* as prefix to run a command."
            )
        );
        assert_eq!(embed.footer.map(|f| f.text).as_deref(), Some("At your service"));

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Cookie (*cookie*, *cookies* or *c*)",
                "Error (*error* or *bug*)",
                "Feature (*feature* or *f*)",
                "Help (*help* or *h*)",
                "Lunch (*lunch* or *l*)",
                "Release notes (*release-notes* or *r*)",
                "Version (*version* or *v*)",
                "Further help",
            ]
        );
        assert_eq!(
            embed.fields[4].value,
            "There is a time to eat."
        );
        assert!(embed.fields[7].value.contains(
            "[readme](https://github.com/Sonia-corporation/il-est-midi-discord/blob/master/README.md)"
        ));
    }

    #[test]
    fn test_help_single_prefix() {
        let context = test_context();
        context.message_config.update_config(Some(PartialMessageConfig {
            command: Some(PartialCommandConfig {
                prefix: Some(Prefix::from("!")),
                ..Default::default()
            }),
            ..Default::default()
        }));

        let embed = respond(&context).rich_content.unwrap();
        assert_eq!(
            embed.description.as_deref(),
            Some("Below is the complete list of commands.\nYou can use *!* as prefix to run a command.")
        );
    }

    #[test]
    fn test_emphasized_list() {
        assert_eq!(emphasized_list(&[]), "");
        assert_eq!(emphasized_list(&["a"]), "*a*");
        assert_eq!(emphasized_list(&["a", "b"]), "*a* or *b*");
        assert_eq!(emphasized_list(&["a", "b", "c"]), "*a*, *b* or *c*");
    }
}
