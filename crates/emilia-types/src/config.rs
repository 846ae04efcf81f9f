//! Bot configuration.
//!
//! `BotConfig` represents the optional `config.toml` under the data
//! directory. Every field has a default matching the original deployment,
//! so a missing file is a fully working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::speech::VoiceProfile;

/// Top-level configuration for the bot process.
///
/// Loaded from `~/.emilia/config.toml`. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Persona name, used in startup output and audio filenames.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Prefix for plain-text commands.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Memory file name, resolved relative to the data directory.
    #[serde(default = "default_memory_file")]
    pub memory_file: String,

    /// Directory for transient audio files. Defaults to the OS temp dir.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// TTS voice configuration.
    #[serde(default)]
    pub voice: VoiceProfile,

    /// Base URL of the OpenAI-compatible completion API.
    #[serde(default = "default_llm_base_url")]
    pub llm_base_url: String,

    /// URL of the speech synthesis endpoint.
    #[serde(default = "default_tts_url")]
    pub tts_url: String,

    /// Base URL of the chat platform's REST API.
    #[serde(default = "default_platform_base_url")]
    pub platform_base_url: String,
}

fn default_bot_name() -> String {
    "Emilia".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_memory_file() -> String {
    "memory.json".to_string()
}

fn default_audio_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_llm_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_tts_url() -> String {
    // Self-hosted edge-tts HTTP bridge.
    "http://127.0.0.1:5002/api/tts".to_string()
}

fn default_platform_base_url() -> String {
    "https://discord.com/api/v10".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            model: default_model(),
            command_prefix: default_command_prefix(),
            memory_file: default_memory_file(),
            audio_dir: default_audio_dir(),
            voice: VoiceProfile::default(),
            llm_base_url: default_llm_base_url(),
            tts_url: default_tts_url(),
            platform_base_url: default_platform_base_url(),
        }
    }
}
