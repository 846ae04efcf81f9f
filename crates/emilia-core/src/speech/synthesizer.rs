//! SpeechSynthesizer trait definition.
//!
//! Implementations live in emilia-infra.

use std::path::Path;

use emilia_types::speech::SpeechError;

/// Trait for text-to-speech backends.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` into an audio file at `path`.
    ///
    /// The future resolves only after the file is fully written and
    /// flushed; the caller reads or uploads it immediately afterwards.
    fn synthesize(
        &self,
        text: &str,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), SpeechError>> + Send;
}
