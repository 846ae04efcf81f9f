//! Speech synthesis seam.

pub mod synthesizer;

pub use synthesizer::SpeechSynthesizer;
