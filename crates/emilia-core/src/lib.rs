//! Core logic for Emilia.
//!
//! This crate defines the trait seams the bot is wired through -- memory
//! store, LLM provider, speech synthesizer, chat connector -- and the
//! message router that orchestrates a reply cycle across them.
//! Implementations live in `emilia-infra`; this crate never performs
//! network or platform I/O itself.

pub mod connector;
pub mod llm;
pub mod memory;
pub mod reply;
pub mod router;
pub mod speech;
