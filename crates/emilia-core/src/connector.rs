//! Chat-platform connector trait.
//!
//! The platform itself (gateway protocol, REST surface, auth) stays behind
//! this seam. The router only needs three capabilities: know the bot's own
//! identity, resolve a referenced message, and post a reply with an
//! optional audio attachment.

use std::path::Path;

use emilia_types::error::ConnectorError;
use emilia_types::event::FetchedMessage;

/// Trait for the chat platform the bot lives on.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in emilia-infra.
pub trait ChatConnector: Send + Sync {
    /// The bot's own platform user id, used for self-message and mention
    /// detection.
    fn bot_user_id(&self) -> &str;

    /// Fetch a message by id so a reply reference can be resolved.
    ///
    /// Distinguishes `NotFound`/`Unauthorized` from transport failures so
    /// the router can log precisely.
    fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> impl std::future::Future<Output = Result<FetchedMessage, ConnectorError>> + Send;

    /// Post `text` as a reply to `reply_to` in `channel_id`, attaching the
    /// audio file at `audio` when given.
    fn send_reply(
        &self,
        channel_id: &str,
        reply_to: &str,
        text: &str,
        audio: Option<&Path>,
    ) -> impl std::future::Future<Output = Result<(), ConnectorError>> + Send;
}
