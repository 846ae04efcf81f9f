//! Environment secret resolution.
//!
//! Both startup secrets come from environment variables, read once. A
//! missing or empty variable is a startup failure that names the variable,
//! not a silent crash later.

use secrecy::SecretString;

use emilia_types::error::ConfigError;

/// Chat-platform access token variable.
pub const CHAT_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// LLM provider API key variable.
pub const LLM_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Read a required secret from the environment.
///
/// Empty and non-unicode values count as missing; secrets must be real
/// strings.
pub fn required(key: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingSecret(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_required_present() {
        // SAFETY: tests in this module touch distinct variable names and
        // clean up after themselves.
        unsafe { std::env::set_var("EMILIA_TEST_SECRET_1", "tok-123") };

        let secret = required("EMILIA_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "tok-123");

        unsafe { std::env::remove_var("EMILIA_TEST_SECRET_1") };
    }

    #[test]
    fn test_required_missing_names_the_variable() {
        let err = required("EMILIA_TEST_SECRET_MISSING").unwrap_err();
        assert!(err.to_string().contains("EMILIA_TEST_SECRET_MISSING"));
    }

    #[test]
    fn test_required_empty_counts_as_missing() {
        // SAFETY: see above.
        unsafe { std::env::set_var("EMILIA_TEST_SECRET_2", "   ") };

        assert!(required("EMILIA_TEST_SECRET_2").is_err());

        unsafe { std::env::remove_var("EMILIA_TEST_SECRET_2") };
    }
}
