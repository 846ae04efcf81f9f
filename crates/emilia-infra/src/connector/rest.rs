//! Chat-platform REST connector.
//!
//! Speaks the platform's Discord-style REST surface: identify as the bot
//! at startup (`users/@me`), fetch referenced messages, and post replies.
//! Replies with audio go up as multipart (`payload_json` + `files[0]`);
//! text-only replies as plain JSON.

use std::path::Path;

use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::info;

use emilia_core::connector::ChatConnector;
use emilia_types::error::ConnectorError;
use emilia_types::event::FetchedMessage;

/// [`ChatConnector`] over the platform's REST API.
///
/// Does NOT derive Debug to prevent accidental exposure of the access
/// token.
pub struct RestConnector {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
    bot_user_id: String,
    bot_name: String,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct WireAuthor {
    id: String,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    id: String,
    content: String,
    author: WireAuthor,
}

impl RestConnector {
    /// Identify with the platform and return a ready connector.
    ///
    /// Resolves the bot's own user id through `users/@me`; everything the
    /// router needs for self-message and mention detection comes from this
    /// one call.
    pub async fn connect(
        base_url: impl Into<String>,
        token: SecretString,
    ) -> Result<Self, ConnectorError> {
        let base_url = base_url.into();
        let http = reqwest::Client::new();

        let response = http
            .get(format!("{base_url}/users/@me"))
            .header(AUTHORIZATION, format!("Bot {}", token.expose_secret()))
            .send()
            .await
            .map_err(|err| ConnectorError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }

        let me: WireUser = response
            .json()
            .await
            .map_err(|err| ConnectorError::Request(err.to_string()))?;
        info!(bot_id = %me.id, username = %me.username, "identified with the chat platform");

        Ok(Self {
            http,
            base_url,
            token,
            bot_user_id: me.id,
            bot_name: me.username,
        })
    }

    /// The bot account's username, for startup output.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.token.expose_secret())
    }
}

impl ChatConnector for RestConnector {
    fn bot_user_id(&self) -> &str {
        &self.bot_user_id
    }

    async fn fetch_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<FetchedMessage, ConnectorError> {
        let url = format!(
            "{}/channels/{}/messages/{}",
            self.base_url, channel_id, message_id
        );
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.auth())
            .send()
            .await
            .map_err(|err| ConnectorError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }

        let wire: WireMessage = response
            .json()
            .await
            .map_err(|err| ConnectorError::Request(err.to_string()))?;
        Ok(FetchedMessage {
            id: wire.id,
            author_id: wire.author.id,
            content: wire.content,
        })
    }

    async fn send_reply(
        &self,
        channel_id: &str,
        reply_to: &str,
        text: &str,
        audio: Option<&Path>,
    ) -> Result<(), ConnectorError> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel_id);
        let payload = reply_payload(text, reply_to);

        let request = self.http.post(url).header(AUTHORIZATION, self.auth());
        let request = match audio {
            Some(path) => {
                let bytes = tokio::fs::read(path).await?;
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("audio.mp3")
                    .to_string();
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(filename)
                    .mime_str("audio/mpeg")
                    .map_err(|err| ConnectorError::Request(err.to_string()))?;
                let form = reqwest::multipart::Form::new()
                    .text("payload_json", payload.to_string())
                    .part("files[0]", part);
                request.multipart(form)
            }
            None => request.json(&payload),
        };

        let response = request
            .send()
            .await
            .map_err(|err| ConnectorError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }
        Ok(())
    }
}

/// The message-create body: reply text plus the thread reference.
fn reply_payload(text: &str, reply_to: &str) -> serde_json::Value {
    serde_json::json!({
        "content": text,
        "message_reference": { "message_id": reply_to },
    })
}

/// Map an unsuccessful HTTP status onto the connector error taxonomy.
///
/// 404 and 401/403 get their own variants so a deleted or inaccessible
/// referenced message is distinguishable from platform trouble.
fn status_error(status: reqwest::StatusCode, message: String) -> ConnectorError {
    match status.as_u16() {
        404 => ConnectorError::NotFound,
        401 | 403 => ConnectorError::Unauthorized,
        code => ConnectorError::Http {
            status: code,
            message,
        },
    }
}
