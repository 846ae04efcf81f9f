//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.emilia/` in
//! production) and deserializes it into [`BotConfig`]. Falls back to the
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use emilia_types::config::BotConfig;

/// The bot's data directory: `~/.emilia`, or `./.emilia` when no home
/// directory can be resolved.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".emilia"))
        .unwrap_or_else(|| PathBuf::from(".emilia"))
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BotConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> BotConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return BotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return BotConfig::default();
        }
    };

    match toml::from_str::<BotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            BotConfig::default()
        }
    }
}

/// Resolve the memory file path for a configuration.
pub fn memory_path(data_dir: &Path, config: &BotConfig) -> PathBuf {
    data_dir.join(&config.memory_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.bot_name, "Emilia");
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
bot_name = "Rem"
command_prefix = "?"

[voice]
voice = "ja-JP-MayuNeural"
rate = "+0%"
pitch = "+0Hz"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.bot_name, "Rem");
        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.voice.voice, "ja-JP-MayuNeural");
        // Untouched fields keep their defaults.
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.bot_name, "Emilia");
    }

    #[test]
    fn memory_path_joins_data_dir() {
        let config = BotConfig::default();
        let path = memory_path(Path::new("/data"), &config);
        assert_eq!(path, PathBuf::from("/data/memory.json"));
    }
}
