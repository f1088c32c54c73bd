/// ideaseed-config library
///
/// Turns wizard answers into an `ideaseed` alias and installs it in the
/// user's shell startup file.

pub mod core;
pub mod error;
pub mod shell;
pub mod wizard;

// Re-exports for convenience
pub use error::{ConfigError, Result};
