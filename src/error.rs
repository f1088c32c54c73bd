/// Error types for ideaseed-config
///
/// This module defines all possible errors that can occur while running the wizard.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ideaseed-config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The shell has no known startup file
    #[error("Unknown shell: '{0}'")]
    UnknownShellKind(String),

    /// The shell is known but its startup file is missing
    #[error("Startup file not found: {}", .0.display())]
    StartupFileNotFound(PathBuf),

    /// Home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt failed (closed stdin, not a terminal, ...)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Result type alias for ideaseed-config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Whether the wizard can carry on by asking the user to add the alias by hand
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConfigError::UnknownShellKind(_) | ConfigError::StartupFileNotFound(_)
        )
    }

    /// Convert ConfigError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::UnknownShellKind(shell) => {
                format!("Hmm... Seems like I don't know your shell, '{}'.", shell)
            }
            ConfigError::StartupFileNotFound(path) => {
                format!("File '{}' not found.", path.display())
            }
            ConfigError::HomeDirNotFound => {
                "Could not find your home directory. Is $HOME set?".to_string()
            }
            ConfigError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ConfigError::Prompt(e) => {
                format!("Could not read your answer. Details: {}", e)
            }
        }
    }
}
