//! Speech synthesis implementations.

pub mod http;

pub use http::HttpSpeechClient;
