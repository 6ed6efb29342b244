//! API key resolution.
//!
//! The only credential Quill needs is a pre-obtained OpenRouter API key.
//! It is read from the environment and wrapped in a `SecretString` so it
//! never shows up in Debug output; if unset, the CLI prompts for it.

use secrecy::SecretString;

/// Environment variable holding the OpenRouter API key.
pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

/// Read the API key from the environment.
///
/// Returns `None` when the variable is unset or empty. A value with
/// invalid Unicode is treated as unset rather than an error, since keys
/// must be valid strings anyway.
pub fn api_key_from_env() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(val) if !val.is_empty() => Some(SecretString::from(val)),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}
