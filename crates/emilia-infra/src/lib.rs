//! Infrastructure layer for Emilia.
//!
//! Contains implementations of the trait seams defined in `emilia-core`:
//! the flat-file JSON memory store, the Groq completion provider, the HTTP
//! speech synthesis client, and the chat-platform REST connector, plus
//! config loading and environment secret resolution.

pub mod config;
pub mod connector;
pub mod llm;
pub mod memory;
pub mod secret;
pub mod speech;
