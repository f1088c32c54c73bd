/// Shell integration module
///
/// Handles shell detection and writing the alias to the shell's startup file.

pub mod alias_installer;
pub mod shell_detector;

pub use alias_installer::AliasInstaller;
pub use shell_detector::{shell_name_from_path, Shell, ShellDetector};
