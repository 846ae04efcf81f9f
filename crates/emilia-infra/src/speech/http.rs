//! HTTP speech synthesis client.
//!
//! POSTs `{text, voice, rate, pitch}` to the synthesis endpoint (an
//! edge-tts HTTP bridge by default) and streams the MP3 response body to
//! the target path chunk by chunk, so large replies never sit in memory
//! whole.

use std::path::Path;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use emilia_core::speech::synthesizer::SpeechSynthesizer;
use emilia_types::speech::{SpeechError, SpeechRequest, VoiceProfile};

/// [`SpeechSynthesizer`] backed by a remote HTTP TTS service.
#[derive(Debug, Clone)]
pub struct HttpSpeechClient {
    http: reqwest::Client,
    url: String,
    profile: VoiceProfile,
}

impl HttpSpeechClient {
    pub fn new(url: impl Into<String>, profile: VoiceProfile) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            profile,
        }
    }

    /// The configured voice profile.
    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }
}

impl SpeechSynthesizer for HttpSpeechClient {
    async fn synthesize(&self, text: &str, path: &Path) -> Result<(), SpeechError> {
        let request = SpeechRequest::new(text, &self.profile);

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|err| SpeechError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let mut file = tokio::fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut bytes_written = 0usize;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| SpeechError::Http(err.to_string()))?;
            file.write_all(&chunk).await?;
            bytes_written += chunk.len();
        }
        // The caller uploads this file the moment we return; it must be
        // complete on disk first.
        file.flush().await?;
        file.sync_all().await?;

        debug!(path = %path.display(), bytes = bytes_written, "speech synthesized");
        Ok(())
    }
}
