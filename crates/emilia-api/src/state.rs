//! Application state wiring all collaborators together.
//!
//! The router in `emilia-core` is generic over its trait seams; AppState
//! pins them to the concrete infra implementations and owns the startup
//! sequence: data dir, config, secrets, platform identification.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::ExposeSecret;

use emilia_core::memory::WarmthLedger;
use emilia_core::reply::ReplyGenerator;
use emilia_core::router::MessageRouter;
use emilia_infra::config::{data_dir, load_config, memory_path};
use emilia_infra::connector::RestConnector;
use emilia_infra::llm::GroqProvider;
use emilia_infra::memory::JsonMemoryStore;
use emilia_infra::secret;
use emilia_infra::speech::HttpSpeechClient;
use emilia_types::config::BotConfig;

/// The router generics pinned to the concrete infra implementations.
pub type ConcreteRouter =
    MessageRouter<JsonMemoryStore, GroqProvider, HttpSpeechClient, RestConnector>;

/// Shared application state for the gateway.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ConcreteRouter>,
    pub config: Arc<BotConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state.
    ///
    /// Fails fast: both secrets must be present and the platform must
    /// accept the token before anything else runs.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let token = secret::required(secret::CHAT_TOKEN_VAR)?;
        let api_key = secret::required(secret::LLM_API_KEY_VAR)?;

        let connector = RestConnector::connect(config.platform_base_url.clone(), token)
            .await
            .map_err(|err| anyhow::anyhow!("could not identify with the chat platform: {err}"))?;

        let store = JsonMemoryStore::new(memory_path(&data_dir, &config));
        let provider =
            GroqProvider::new(api_key.expose_secret(), &config.model, &config.llm_base_url);
        let synthesizer = HttpSpeechClient::new(config.tts_url.clone(), config.voice.clone());

        tokio::fs::create_dir_all(&config.audio_dir).await?;

        let router = MessageRouter::new(
            WarmthLedger::new(store),
            ReplyGenerator::new(provider, config.model.clone()),
            synthesizer,
            connector,
            &config,
        );

        Ok(Self {
            router: Arc::new(router),
            config: Arc::new(config),
            data_dir,
        })
    }
}
