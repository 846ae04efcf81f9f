//! Memory store trait.
//!
//! Defines the interface for the persisted user-memory mapping.
//! Implementations live in emilia-infra.

use emilia_types::error::MemoryError;
use emilia_types::memory::MemoryMap;

/// Trait for whole-map persistence of user records.
///
/// The contract mirrors the flat-file behavior the bot relies on: `load`
/// returns an empty map when nothing has been persisted yet, and `save`
/// replaces the entire mapping. A present-but-malformed store is an error,
/// not an empty map.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait MemoryStore: Send + Sync {
    /// Load the full mapping. Absent state yields an empty map.
    fn load(&self) -> impl std::future::Future<Output = Result<MemoryMap, MemoryError>> + Send;

    /// Persist the full mapping, replacing whatever was stored before.
    fn save(
        &self,
        map: &MemoryMap,
    ) -> impl std::future::Future<Output = Result<(), MemoryError>> + Send;
}
