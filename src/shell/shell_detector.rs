/// Shell detection logic
///
/// Detects which shell the user is running and knows where each supported
/// shell keeps its startup file.

use std::env;
use std::path::Path;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Fish,
    Bash,
    Zsh,
    Csh,
    Ksh,
    Tcsh,
}

impl Shell {
    /// Every shell we know a startup file for
    pub const ALL: [Shell; 6] = [
        Shell::Fish,
        Shell::Bash,
        Shell::Zsh,
        Shell::Csh,
        Shell::Ksh,
        Shell::Tcsh,
    ];

    /// Look a shell up by its executable name
    pub fn from_name(name: &str) -> Option<Shell> {
        Self::ALL.into_iter().find(|shell| shell.name() == name)
    }

    /// Get the shell name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Shell::Fish => "fish",
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Csh => "csh",
            Shell::Ksh => "ksh",
            Shell::Tcsh => "tcsh",
        }
    }

    /// Unexpanded path of the file the shell sources on startup
    ///
    /// May contain `~` and `$VAR` references; see `AliasInstaller` for expansion.
    pub fn startup_file(&self) -> &'static str {
        match self {
            Shell::Fish => "~/.config/fish/config.fish",
            Shell::Bash => "~/.bashrc",
            Shell::Zsh => "~/.zshrc",
            Shell::Csh => "~/.cshrc",
            Shell::Ksh => "~/.kshrc",
            Shell::Tcsh => "~/.tcshrc",
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Shell detector
pub struct ShellDetector;

impl ShellDetector {
    /// Name of the user's login shell, from `$SHELL`
    ///
    /// Returns an empty string when `$SHELL` is unset. The name is not checked
    /// against the shells we support.
    pub fn detect_name() -> String {
        match env::var("SHELL") {
            Ok(shell_path) => shell_name_from_path(&shell_path),
            Err(_) => String::new(),
        }
    }
}

/// Final path segment of a shell executable path (`/usr/bin/zsh` -> `zsh`)
pub fn shell_name_from_path(shell_path: &str) -> String {
    Path::new(shell_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_name() {
        assert_eq!(Shell::Bash.name(), "bash");
        assert_eq!(Shell::Zsh.name(), "zsh");
        assert_eq!(Shell::Fish.name(), "fish");
        assert_eq!(Shell::Tcsh.name(), "tcsh");
    }

    #[test]
    fn test_from_name() {
        for shell in Shell::ALL {
            assert_eq!(Shell::from_name(shell.name()), Some(shell));
        }
        assert_eq!(Shell::from_name("powershell"), None);
        assert_eq!(Shell::from_name(""), None);
        assert_eq!(Shell::from_name("Bash"), None);
    }

    #[test]
    fn test_startup_file() {
        assert_eq!(Shell::Fish.startup_file(), "~/.config/fish/config.fish");
        assert_eq!(Shell::Bash.startup_file(), "~/.bashrc");
        assert_eq!(Shell::Ksh.startup_file(), "~/.kshrc");
        assert!(Shell::ALL.iter().all(|s| s.startup_file().starts_with("~/")));
    }

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Bash.to_string(), "bash");
        assert_eq!(Shell::Csh.to_string(), "csh");
    }

    #[test]
    fn test_shell_name_from_path() {
        assert_eq!(shell_name_from_path("/bin/bash"), "bash");
        assert_eq!(shell_name_from_path("/usr/local/bin/fish"), "fish");
        assert_eq!(shell_name_from_path("zsh"), "zsh");
        assert_eq!(shell_name_from_path("/opt/weird/nushell"), "nushell");
        assert_eq!(shell_name_from_path(""), "");
    }
}
