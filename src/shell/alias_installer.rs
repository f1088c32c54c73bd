/// Alias installer
///
/// Appends the generated alias line to the startup file of the user's shell.

use crate::error::{ConfigError, Result};
use crate::shell::Shell;
use regex::{Captures, Regex};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{debug, info};

// `$NAME` or `${NAME}`, same forms os.path.expandvars understands
static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\w+)|\$\{([^}]*)\}").expect("env var pattern is valid")
});

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Alias installer
pub struct AliasInstaller {
    home: PathBuf,
    env_lookup: EnvLookup,
}

impl AliasInstaller {
    /// Create a new installer for the current user
    ///
    /// # Returns
    /// * `Ok(AliasInstaller)` - New installer instance
    /// * `Err(ConfigError)` - If home directory cannot be determined
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_home(home))
    }

    /// Installer rooted at an explicit home directory, reading the process environment
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            env_lookup: Box::new(|name| env::var(name).ok()),
        }
    }

    /// Replace how `$VAR` references in startup file paths are resolved
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Append `alias_line` to the startup file of `shell_name`
    ///
    /// # Arguments
    /// * `shell_name` - Shell executable name, e.g. `"zsh"`
    /// * `alias_line` - The full `alias ...` statement, without trailing newline
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The startup file that was written to
    /// * `Err(ConfigError::UnknownShellKind)` - No known startup file for this shell
    /// * `Err(ConfigError::StartupFileNotFound)` - The startup file doesn't exist
    /// * `Err(ConfigError::Io)` - Opening or writing the file failed
    pub fn install(&self, shell_name: &str, alias_line: &str) -> Result<PathBuf> {
        let shell = Shell::from_name(shell_name)
            .ok_or_else(|| ConfigError::UnknownShellKind(shell_name.to_string()))?;

        let rc_path = self.startup_file_path(shell);
        debug!(shell = %shell, path = %rc_path.display(), "resolved startup file");

        // Never create it: a missing file usually means the shell isn't really in use
        if !rc_path.is_file() {
            return Err(ConfigError::StartupFileNotFound(rc_path));
        }

        let mut file = OpenOptions::new().append(true).open(&rc_path)?;

        println!(
            "Appending the following to {}:\n\n  {}\n",
            rc_path.display(),
            alias_line
        );
        writeln!(file, "{}", alias_line)?;
        info!(path = %rc_path.display(), "alias appended");

        println!(
            "Restart your shell or source the file for the new alias to take effect, \
             or execute the 'alias' line above"
        );

        Ok(rc_path)
    }

    /// Absolute startup file path for `shell`, with `~` and `$VAR` expanded
    pub fn startup_file_path(&self, shell: Shell) -> PathBuf {
        PathBuf::from(self.expand(shell.startup_file()))
    }

    fn expand(&self, raw: &str) -> String {
        let with_home = match raw.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                let home = self.home.to_string_lossy();
                let home = home.trim_end_matches('/');
                if home.is_empty() && rest.is_empty() {
                    "/".to_string()
                } else {
                    format!("{}{}", home, rest)
                }
            }
            _ => raw.to_string(),
        };

        ENV_VAR_REGEX
            .replace_all(&with_home, |caps: &Captures| {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str());
                // Unknown variables stay as written
                (self.env_lookup)(name).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
