//! Normalized chat-platform message events.
//!
//! The gateway turns whatever the chat platform delivers into an
//! [`InboundMessage`] before the router sees it, so core logic never
//! touches platform wire formats.

use serde::{Deserialize, Serialize};

/// The author of an inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAuthor {
    /// Stable platform user id (snowflake-style string).
    pub id: String,
    /// Display name as shown in the channel.
    pub display_name: String,
    /// Whether the platform flags this account as a bot.
    #[serde(default)]
    pub is_bot: bool,
}

/// A message-create event, normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Platform message id; also used to derive the temp audio filename.
    pub id: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    pub author: MessageAuthor,
    /// Raw message text, mention tokens included.
    pub content: String,
    /// User ids structurally mentioned in the message.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Message id this message replies to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// A referenced message resolved through the connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedMessage {
    pub id: String,
    /// Author id of the referenced message; compared against the bot's own id.
    pub author_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_message_defaults() {
        // A minimal platform payload: no mentions, no reply reference.
        let json = r#"{
            "id": "555",
            "channel_id": "42",
            "author": {"id": "123", "display_name": "Subaru"},
            "content": "hello"
        }"#;
        let msg: InboundMessage = serde_json::from_str(json).unwrap();
        assert!(!msg.author.is_bot);
        assert!(msg.mentions.is_empty());
        assert!(msg.reply_to.is_none());
    }

    #[test]
    fn test_inbound_message_roundtrip() {
        let msg = InboundMessage {
            id: "555".to_string(),
            channel_id: "42".to_string(),
            author: MessageAuthor {
                id: "123".to_string(),
                display_name: "Subaru".to_string(),
                is_bot: false,
            },
            content: "<@900> hello".to_string(),
            mentions: vec!["900".to_string()],
            reply_to: Some("554".to_string()),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: InboundMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.mentions, vec!["900"]);
        assert_eq!(parsed.reply_to.as_deref(), Some("554"));
    }

    #[test]
    fn test_reply_to_omitted_when_none() {
        let msg = InboundMessage {
            id: "1".to_string(),
            channel_id: "2".to_string(),
            author: MessageAuthor {
                id: "3".to_string(),
                display_name: "x".to_string(),
                is_bot: false,
            },
            content: String::new(),
            mentions: Vec::new(),
            reply_to: None,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("reply_to"));
    }
}
