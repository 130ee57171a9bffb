//! End-to-end routing tests over the real command registry.

mod common;

use common::{guild_mention, test_bot};
use discord_bot::error::AppError;
use discord_bot::message_config::{PartialCommandConfig, PartialMessageConfig};
use discord_bot::router::IgnoredMessage;
use message_command::{Prefix, Response};

fn footer(response: &Response) -> Option<&str> {
    response
        .rich_content
        .as_ref()
        .and_then(|r| r.footer.as_ref())
        .map(|f| f.text.as_str())
}

#[test]
fn test_every_command_answers() {
    let bot = test_bot("1.4.0", true);

    let cases = [
        ("-version", "Born to serve"),
        ("!bug", "Yes, I am sure"),
        ("$h", "At your service"),
        ("-cookies", "Cookie delivered"),
        ("-L now", "Bon appétit"),
        ("-release-notes", "Release 1.4.0"),
        ("!f", "Help me to be better"),
    ];

    for (content, expected) in cases {
        let response = bot.router.route(&guild_mention(content)).unwrap();
        assert_eq!(footer(&response), Some(expected), "{}", content);
    }
}

#[test]
fn test_commands_after_bot_mention() {
    let bot = test_bot("1.4.0", true);

    let cases = [
        ("<@999> -help", "At your service"),
        ("<@!999>   !L", "Bon appétit"),
        ("<@999>\n$cookie please", "Cookie delivered"),
    ];

    for (content, expected) in cases {
        let response = bot.router.route(&guild_mention(content)).unwrap();
        assert_eq!(footer(&response), Some(expected), "{}", content);
    }
}

#[test]
fn test_keyword_continuation_gets_author_reply() {
    let bot = test_bot("1.4.0", true);
    let response = bot.router.route(&guild_mention("-helpme")).unwrap();
    assert_eq!(response, Response::text("Il est midi <@!456>!"));
}

#[test]
fn test_prefix_reconfiguration() {
    let bot = test_bot("1.4.0", true);
    assert!(bot.router.route(&guild_mention("-lunch")).unwrap().rich_content.is_some());

    bot.message_config.update_config(Some(PartialMessageConfig {
        command: Some(PartialCommandConfig {
            prefix: Some(Prefix::from("?")),
            ..Default::default()
        }),
        ..Default::default()
    }));

    assert_eq!(
        bot.router.route(&guild_mention("-lunch")).unwrap(),
        Response::text("Il est midi <@!456>!")
    );
    assert!(bot.router.route(&guild_mention("?lunch")).unwrap().rich_content.is_some());
}

#[test]
fn test_guild_message_without_mention() {
    let bot = test_bot("1.4.0", true);
    let mut message = guild_mention("-help");
    message.mentions.bot = false;

    assert!(matches!(
        bot.router.route(&message),
        Err(AppError::Ignored(IgnoredMessage::NotMentioned))
    ));
}
