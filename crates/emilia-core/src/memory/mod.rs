//! User memory: the store seam and the warmth ledger built on it.

pub mod ledger;
pub mod store;

pub use ledger::WarmthLedger;
pub use store::MemoryStore;
