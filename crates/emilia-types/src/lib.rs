//! Shared domain types for Emilia.
//!
//! Pure data: message events, user memory records, LLM request/response
//! shapes, voice configuration, and the per-domain error enums. No I/O
//! happens here; behavior lives in `emilia-core` and implementations in
//! `emilia-infra`.

pub mod config;
pub mod error;
pub mod event;
pub mod llm;
pub mod memory;
pub mod speech;
