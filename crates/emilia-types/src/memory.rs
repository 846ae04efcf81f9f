//! Per-user memory records.
//!
//! The memory file is a single JSON object mapping a stable user id to a
//! [`UserRecord`]. The schema is fixed: `{"<user_id>": {"name": ..., "warmth": ...}}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the bot remembers about one user.
///
/// `warmth` starts at 1 on first interaction and goes up by exactly 1 per
/// reply cycle; it never decreases and records are never deleted. `name` is
/// the display name captured at first sight and is not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name at the time the record was created.
    pub name: String,
    /// Interaction counter, >= 1.
    pub warmth: u32,
}

impl UserRecord {
    /// A fresh record for a user seen for the first time.
    pub fn first_sight(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmth: 1,
        }
    }
}

/// The whole persisted memory: user id -> record.
pub type MemoryMap = HashMap<String, UserRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sight_starts_at_one() {
        let record = UserRecord::first_sight("Subaru");
        assert_eq!(record.name, "Subaru");
        assert_eq!(record.warmth, 1);
    }

    #[test]
    fn test_user_record_json_shape() {
        let record = UserRecord {
            name: "Subaru".to_string(),
            warmth: 3,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Subaru","warmth":3}"#);

        let parsed: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_memory_map_roundtrip() {
        let mut map = MemoryMap::new();
        map.insert("123".to_string(), UserRecord::first_sight("Subaru"));

        let json = serde_json::to_string(&map).unwrap();
        let parsed: MemoryMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get("123").unwrap().warmth, 1);
    }

    #[test]
    fn test_memory_map_rejects_malformed_record() {
        let result = serde_json::from_str::<MemoryMap>(r#"{"123": {"name": "Subaru"}}"#);
        assert!(result.is_err());
    }
}
