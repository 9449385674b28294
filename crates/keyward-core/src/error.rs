//! Error types for keyward-core
//!
//! This module provides the error taxonomy for credential resolution and
//! user-friendly error formatting for the CLI.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// The binary was built with an edition other than single or team
    #[error("invalid CLI build, no edition defined: {0:?}")]
    InvalidEdition(String),

    /// Piped input could not be decoded into a credential record
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The user interrupted or cancelled a prompt
    #[error("operation cancelled")]
    Cancelled,

    /// A prompt primitive failed for another reason
    #[error("prompt error: {0}")]
    Prompt(String),

    /// Provider field schemas are unavailable
    #[error("settings error: {0}")]
    Settings(String),

    /// The persistence collaborator rejected the record
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for user-friendly error messages
///
/// Provides human-readable error messages and suggestions for fixing.
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get a suggestion for how to fix the error
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for Error {
    fn user_message(&self) -> String {
        match self {
            Error::InvalidEdition(edition) => {
                format!("🧱 Invalid CLI build, unknown edition {:?}.", edition)
            }
            Error::InvalidInput(reason) => format!("📥 Invalid input: {}", reason),
            Error::Cancelled => "✋ Operation cancelled.".to_string(),
            Error::Prompt(msg) => format!("⌨️ Prompt failed: {}", msg),
            Error::Settings(msg) => format!("⚙️ Provider settings error: {}", msg),
            Error::Storage(msg) => format!("💾 Could not save credential: {}", msg),
            Error::Configuration(msg) => format!("⚙️ Configuration error: {}", msg),
            Error::Io(e) => format!("❌ I/O error: {}", e),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Error::InvalidEdition(_) => Some(
                "💡 Rebuild with KEYWARD_EDITION set to `single` or `team`.".to_string(),
            ),
            Error::InvalidInput(_) => Some(
                "💡 Pipe a JSON object such as {\"service\":\"github\",\"credential\":{\"token\":\"...\"}}."
                    .to_string(),
            ),
            Error::Settings(_) => Some(
                "💡 Check the `settings.providers_file` entry in your keyward configuration."
                    .to_string(),
            ),
            Error::Storage(_) => Some(
                "💡 Check that the `storage.dir` directory is writable.".to_string(),
            ),
            Error::Configuration(_) => {
                Some("💡 Check config/local.toml and KEYWARD_* environment variables.".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error for display in the CLI
pub fn format_error_for_cli(error: &Error) -> String {
    let mut output = String::new();

    output.push_str(&error.user_message());
    output.push('\n');

    if let Some(suggestion) = error.suggestion() {
        output.push_str(&suggestion);
        output.push('\n');
    }

    output
}
