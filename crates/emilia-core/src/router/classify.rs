//! Event classification.
//!
//! Pure function over a normalized message: decides which branch the
//! router takes, in priority order. Reply references come back unresolved
//! because resolving them needs the connector.

use emilia_types::event::InboundMessage;

/// Where an inbound message goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Bot-authored message; dropped before any other check.
    Ignore,
    /// The bot was mentioned and text remains after stripping the token.
    Mention { content: String },
    /// The bot was mentioned with nothing else; no reply cycle.
    EmptyMention,
    /// The message replies to another message; the router must fetch it to
    /// learn whether the bot wrote it.
    ReplyReference { message_id: String },
    /// Falls through to prefix command processing.
    Command,
}

/// Classify `message` against the bot's own user id.
///
/// Branches are mutually exclusive and checked in priority order:
/// self/bot author, mention, reply reference, command fallthrough.
pub fn classify(message: &InboundMessage, bot_user_id: &str) -> Route {
    if message.author.is_bot {
        return Route::Ignore;
    }

    if message.mentions.iter().any(|id| id == bot_user_id) {
        let token = format!("<@{bot_user_id}>");
        let content = message.content.replace(&token, "").trim().to_string();
        return if content.is_empty() {
            Route::EmptyMention
        } else {
            Route::Mention { content }
        };
    }

    if let Some(ref message_id) = message.reply_to {
        return Route::ReplyReference {
            message_id: message_id.clone(),
        };
    }

    Route::Command
}

#[cfg(test)]
mod tests {
    use super::*;
    use emilia_types::event::MessageAuthor;

    const BOT_ID: &str = "900";

    fn message(content: &str, mentions: &[&str], reply_to: Option<&str>) -> InboundMessage {
        InboundMessage {
            id: "555".to_string(),
            channel_id: "42".to_string(),
            author: MessageAuthor {
                id: "123".to_string(),
                display_name: "Subaru".to_string(),
                is_bot: false,
            },
            content: content.to_string(),
            mentions: mentions.iter().map(|s| s.to_string()).collect(),
            reply_to: reply_to.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_bot_author_is_ignored() {
        let mut msg = message("<@900> hello", &[BOT_ID], Some("554"));
        msg.author.is_bot = true;
        assert_eq!(classify(&msg, BOT_ID), Route::Ignore);
    }

    #[test]
    fn test_mention_with_text_strips_token() {
        let msg = message("<@900> hello there", &[BOT_ID], None);
        assert_eq!(
            classify(&msg, BOT_ID),
            Route::Mention {
                content: "hello there".to_string()
            }
        );
    }

    #[test]
    fn test_mention_token_only_is_empty() {
        let msg = message("<@900>", &[BOT_ID], None);
        assert_eq!(classify(&msg, BOT_ID), Route::EmptyMention);
    }

    #[test]
    fn test_mention_whitespace_only_is_empty() {
        let msg = message("  <@900>   ", &[BOT_ID], None);
        assert_eq!(classify(&msg, BOT_ID), Route::EmptyMention);
    }

    #[test]
    fn test_mention_wins_over_reply_reference() {
        let msg = message("<@900> did you mean this?", &[BOT_ID], Some("554"));
        assert!(matches!(classify(&msg, BOT_ID), Route::Mention { .. }));
    }

    #[test]
    fn test_mention_of_someone_else_is_not_a_mention() {
        let msg = message("<@777> hello", &["777"], None);
        assert_eq!(classify(&msg, BOT_ID), Route::Command);
    }

    #[test]
    fn test_reply_reference_is_returned_unresolved() {
        let msg = message("thanks!", &[], Some("554"));
        assert_eq!(
            classify(&msg, BOT_ID),
            Route::ReplyReference {
                message_id: "554".to_string()
            }
        );
    }

    #[test]
    fn test_plain_message_falls_through() {
        let msg = message("just chatting", &[], None);
        assert_eq!(classify(&msg, BOT_ID), Route::Command);
    }

    #[test]
    fn test_mention_token_in_the_middle() {
        let msg = message("hey <@900> are you there?", &[BOT_ID], None);
        assert_eq!(
            classify(&msg, BOT_ID),
            Route::Mention {
                content: "hey  are you there?".to_string()
            }
        );
    }
}
