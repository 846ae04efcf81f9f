//! Speech synthesis types.
//!
//! The synthesizer is driven by a fixed [`VoiceProfile`] (voice, rate,
//! pitch) and produces an MP3 written to a caller-chosen path.

use serde::{Deserialize, Serialize};

/// Voice configuration for the TTS service.
///
/// Rate and pitch use the service's relative notation ("-5%", "+3Hz").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub voice: String,
    pub rate: String,
    pub pitch: String,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            voice: "ja-JP-NanamiNeural".to_string(),
            rate: "-5%".to_string(),
            pitch: "+3Hz".to_string(),
        }
    }
}

/// Request body sent to the synthesis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: String,
    pub rate: String,
    pub pitch: String,
}

impl SpeechRequest {
    /// Build a request for `text` using the given profile.
    pub fn new(text: impl Into<String>, profile: &VoiceProfile) -> Self {
        Self {
            text: text.into(),
            voice: profile.voice.clone(),
            rate: profile.rate.clone(),
            pitch: profile.pitch.clone(),
        }
    }
}

/// Errors from speech synthesis.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("synthesis service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("synthesis request failed: {0}")]
    Http(String),

    #[error("audio file error: {0}")]
    Io(#[from] std::io::Error),
}
