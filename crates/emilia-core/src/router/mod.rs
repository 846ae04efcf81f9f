//! Message router: classifies inbound events and runs reply cycles.
//!
//! A reply cycle is the whole sequence the bot exists for: warmth update,
//! completion call, speech synthesis, send text+audio, delete the temp
//! file. The router owns that ordering; everything effectful happens
//! behind the four trait seams it is generic over.

pub mod classify;
pub mod commands;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use emilia_types::config::BotConfig;
use emilia_types::error::{ConnectorError, ReplyError};
use emilia_types::event::InboundMessage;

use crate::connector::ChatConnector;
use crate::llm::provider::LlmProvider;
use crate::memory::ledger::WarmthLedger;
use crate::memory::store::MemoryStore;
use crate::reply::generator::ReplyGenerator;
use crate::router::classify::{Route, classify};
use crate::router::commands::Command;
use crate::speech::synthesizer::SpeechSynthesizer;

/// What the router did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Bot-authored message; nothing happened.
    Ignored,
    /// No branch produced a reply (empty mention, reply to a non-bot
    /// message, unresolvable reference, plain chatter).
    NoReply,
    /// A full reply cycle completed.
    Replied { warmth: u32 },
    /// A prefix command was answered.
    CommandHandled,
}

/// Orchestrates event handling across the four trait seams.
///
/// Generic over its collaborators so core stays free of file, HTTP, and
/// platform concerns.
pub struct MessageRouter<S, L, T, C>
where
    S: MemoryStore,
    L: LlmProvider,
    T: SpeechSynthesizer,
    C: ChatConnector,
{
    ledger: WarmthLedger<S>,
    generator: ReplyGenerator<L>,
    synthesizer: T,
    connector: C,
    command_prefix: String,
    audio_dir: PathBuf,
    audio_prefix: String,
}

impl<S, L, T, C> MessageRouter<S, L, T, C>
where
    S: MemoryStore,
    L: LlmProvider,
    T: SpeechSynthesizer,
    C: ChatConnector,
{
    pub fn new(
        ledger: WarmthLedger<S>,
        generator: ReplyGenerator<L>,
        synthesizer: T,
        connector: C,
        config: &BotConfig,
    ) -> Self {
        Self {
            ledger,
            generator,
            synthesizer,
            connector,
            command_prefix: config.command_prefix.clone(),
            audio_dir: config.audio_dir.clone(),
            audio_prefix: config.bot_name.to_lowercase(),
        }
    }

    /// Access the connector (for startup logging).
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Handle one inbound event to completion.
    ///
    /// Branches are mutually exclusive, priority ordered: self-message,
    /// mention, reply reference, command fallthrough.
    pub async fn handle(&self, message: &InboundMessage) -> Result<Outcome, ReplyError> {
        match classify(message, self.connector.bot_user_id()) {
            Route::Ignore => Ok(Outcome::Ignored),

            Route::EmptyMention => Ok(Outcome::NoReply),

            Route::Mention { content } => self.reply_cycle(message, &content).await,

            Route::ReplyReference { message_id } => {
                match self
                    .connector
                    .fetch_message(&message.channel_id, &message_id)
                    .await
                {
                    Ok(referenced) if referenced.author_id == self.connector.bot_user_id() => {
                        // Full text, no mention stripping in this branch.
                        self.reply_cycle(message, message.content.trim()).await
                    }
                    Ok(_) => Ok(Outcome::NoReply),
                    Err(err @ (ConnectorError::NotFound | ConnectorError::Unauthorized)) => {
                        debug!(%message_id, error = %err, "reply reference unavailable");
                        Ok(Outcome::NoReply)
                    }
                    Err(err) => {
                        warn!(%message_id, error = %err, "could not resolve reply reference");
                        Ok(Outcome::NoReply)
                    }
                }
            }

            Route::Command => self.handle_command(message).await,
        }
    }

    /// Memory update -> completion -> synthesis -> send -> cleanup.
    async fn reply_cycle(
        &self,
        message: &InboundMessage,
        content: &str,
    ) -> Result<Outcome, ReplyError> {
        let record = self
            .ledger
            .record_interaction(&message.author.id, &message.author.display_name)
            .await?;

        let text = self.generator.generate(&record, content).await?;

        let audio_path = self
            .audio_dir
            .join(format!("{}_{}.mp3", self.audio_prefix, message.id));
        self.synthesizer.synthesize(&text, &audio_path).await?;

        let sent = self
            .connector
            .send_reply(&message.channel_id, &message.id, &text, Some(&audio_path))
            .await;

        // The audio file is transient: remove it whether or not the send
        // went through. Removal failure is logged, never fatal.
        if let Err(err) = tokio::fs::remove_file(&audio_path).await {
            warn!(path = %audio_path.display(), error = %err, "could not remove audio file");
        }
        sent?;

        info!(
            user_id = %message.author.id,
            warmth = record.warmth,
            "reply cycle complete"
        );
        Ok(Outcome::Replied {
            warmth: record.warmth,
        })
    }

    async fn handle_command(&self, message: &InboundMessage) -> Result<Outcome, ReplyError> {
        let Some(command) = commands::parse(&message.content, &self.command_prefix) else {
            return Ok(Outcome::NoReply);
        };

        let text = match command {
            Command::Ping => "pong".to_string(),
            Command::Warmth => match self.ledger.peek(&message.author.id).await? {
                Some(record) => {
                    format!("{}'s warmth level is {}.", record.name, record.warmth)
                }
                None => "We haven't talked yet, so there's nothing to report!".to_string(),
            },
        };

        self.connector
            .send_reply(&message.channel_id, &message.id, &text, None)
            .await?;
        Ok(Outcome::CommandHandled)
    }
}
