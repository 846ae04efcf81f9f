//! Reply generator: turns stored state plus an incoming message into the
//! persona's answer via one completion call.

use tracing::debug;

use emilia_types::llm::{CompletionRequest, LlmError, Message, MessageRole};
use emilia_types::memory::UserRecord;

use crate::llm::provider::LlmProvider;
use crate::reply::prompt::{PersonaPrompt, SYSTEM_PROMPT};

/// Upper bound for a spoken chat reply; the TTS step keeps replies short anyway.
const MAX_REPLY_TOKENS: u32 = 1024;

/// Generates persona replies through an [`LlmProvider`].
///
/// Generic over the provider so core stays free of HTTP concerns.
pub struct ReplyGenerator<L: LlmProvider> {
    provider: L,
    model: String,
}

impl<L: LlmProvider> ReplyGenerator<L> {
    pub fn new(provider: L, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &L {
        &self.provider
    }

    /// Produce the reply text for `content` from a user with `record`.
    ///
    /// Returns the first choice's text, trimmed. Provider errors propagate;
    /// the caller decides whether the event dies silently or loudly.
    pub async fn generate(&self, record: &UserRecord, content: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: PersonaPrompt::user_prompt(record, content),
            }],
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: MAX_REPLY_TOKENS,
            temperature: None,
        };

        let response = self.provider.complete(&request).await?;
        debug!(
            provider = self.provider.name(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion finished"
        );

        Ok(response.content.trim().to_string())
    }
}
