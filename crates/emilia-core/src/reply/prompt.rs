//! Persona prompt builder.
//!
//! One fixed system instruction defines who the bot is; the per-call user
//! prompt embeds the stored name, the warmth level, and the incoming text
//! so the model can scale its tone to the relationship.

use emilia_types::memory::UserRecord;

/// The fixed persona instruction sent as the system message on every call.
pub const SYSTEM_PROMPT: &str = "\
You are Emilia from Re:Zero.
You are kind, gentle, soft-spoken, and warm.
You speak politely and sweetly.
You remember names and become friendlier over time.
You never act rude or sarcastic.";

/// Builds the per-call user prompt.
pub struct PersonaPrompt;

impl PersonaPrompt {
    /// Layout: name, warmth level, then what the user said.
    pub fn user_prompt(record: &UserRecord, content: &str) -> String {
        format!(
            "User name: {}\nWarmth level: {}\n\nUser says: {}",
            record.name, record.warmth, content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_is_the_persona() {
        assert!(SYSTEM_PROMPT.contains("Emilia"));
        assert!(SYSTEM_PROMPT.contains("kind"));
        assert!(SYSTEM_PROMPT.contains("never act rude"));
    }

    #[test]
    fn test_user_prompt_embeds_state() {
        let record = UserRecord {
            name: "Subaru".to_string(),
            warmth: 4,
        };
        let prompt = PersonaPrompt::user_prompt(&record, "good morning!");

        assert!(prompt.contains("User name: Subaru"));
        assert!(prompt.contains("Warmth level: 4"));
        assert!(prompt.contains("User says: good morning!"));
    }

    #[test]
    fn test_user_prompt_order() {
        let record = UserRecord::first_sight("Subaru");
        let prompt = PersonaPrompt::user_prompt(&record, "hi");

        let name_pos = prompt.find("User name:").unwrap();
        let warmth_pos = prompt.find("Warmth level:").unwrap();
        let says_pos = prompt.find("User says:").unwrap();
        assert!(name_pos < warmth_pos);
        assert!(warmth_pos < says_pos);
    }
}
