/// Configuration wizard
///
/// Asks the questions, turns the answers into an alias and tries to install it.

pub mod prompter;

pub use prompter::{DialoguerPrompter, Prompter};

use crate::core::{build_alias, Settings, Value};
use crate::error::Result;
use crate::shell::{AliasInstaller, ShellDetector};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Suggested alias name
pub const DEFAULT_ALIAS_NAME: &str = "idea";

const PLACEHOLDER_HINT: &str = "For the two following questions, you can use placeholders:
    %(repository)s - the repository's name
    %(owner)s      - the repository's owner
    %(username)s   - the username of which account you are using ideaseed with
    %(project)s    - the selected project's name (only for the column)
See https://github.com/ewen-lbh/ideaseed#placeholders for details.";

/// Knobs coming from the command line
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    /// Use this shell instead of detecting it from `$SHELL`
    pub shell: Option<String>,
    /// Use this alias name instead of asking for one
    pub alias_name: Option<String>,
    /// Print the alias line instead of writing it anywhere
    pub dry_run: bool,
}

/// How a wizard run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Alias appended to this startup file
    Installed(PathBuf),
    /// Couldn't write it, the user was told to add this line themselves
    ManualFallback(String),
    /// Dry run, the line was only printed
    Printed(String),
}

/// Ask every question and collect the answers as ideaseed flags
///
/// Returns the settings and the alias name to use.
pub fn prompt_for_settings<P: Prompter + ?Sized>(
    prompter: &mut P,
    alias_name: Option<&str>,
) -> Result<(Settings, String)> {
    let mut settings = Settings::new();

    let auth_cache = prompter.confirm("Save credentials in the authentication cache?", true)?;
    settings.set("--no-auth-cache", !auth_cache);

    let check_updates = prompter.confirm("Check for updates?", true)?;
    settings.set("--no-check-for-updates", !check_updates);

    let self_assign = prompter.confirm(
        "Assign yourself to issues if you don't assign anyone with -@?",
        true,
    )?;
    settings.set("--no-self-assign", !self_assign);

    println!("{}", PLACEHOLDER_HINT);

    let project = prompter.ask("Default project name (leave blank for %(repository)s)")?;
    settings.set("--default-project", non_blank(project));

    let column = prompter.ask("Default column name (leave blank for 'To Do')")?;
    settings.set("--default-column", non_blank(column));

    let keyword = prompter.ask(
        "Keyword that sends cards to your user profile instead of a repository \
         (leave blank for none)",
    )?;
    settings.set("--user-keyword", non_blank(keyword));

    let user_project =
        prompter.ask("Project to use on your user profile (leave blank for none)")?;
    settings.set("--user-project", non_blank(user_project));

    let create_missing = prompter.confirm(
        "Create missing tags, labels, projects or columns (after confirmation)?",
        false,
    )?;
    settings.set("--create-missing", create_missing);

    let alias_name = match alias_name {
        Some(name) => name.to_string(),
        None => prompter
            .ask_with_default(
                "What name do you want to invoke your configured ideaseed with?",
                DEFAULT_ALIAS_NAME,
            )?
            .trim()
            .to_string(),
    };

    Ok((settings, alias_name))
}

/// Run the whole wizard: questions, alias, install
///
/// `make_installer` is only called when the alias is actually written, so a
/// dry run works without a home directory. Unknown shells and missing startup
/// files are reported to the user with the line to add by hand. Anything else
/// is returned as an error.
pub fn run_wizard<P, F>(
    prompter: &mut P,
    options: &WizardOptions,
    make_installer: F,
) -> Result<WizardOutcome>
where
    P: Prompter + ?Sized,
    F: FnOnce() -> Result<AliasInstaller>,
{
    let (settings, alias_name) = prompt_for_settings(prompter, options.alias_name.as_deref())?;
    let alias_line = build_alias(&settings, &alias_name);
    debug!(alias = %alias_line, "built alias");

    if options.dry_run {
        println!("\n  {}\n", alias_line);
        return Ok(WizardOutcome::Printed(alias_line));
    }

    let shell_name = options
        .shell
        .clone()
        .unwrap_or_else(ShellDetector::detect_name);
    debug!(shell = %shell_name, "using shell");

    install_or_explain(&make_installer()?, &shell_name, alias_line)
}

/// Try to install, falling back to manual instructions on the expected failures
pub fn install_or_explain(
    installer: &AliasInstaller,
    shell_name: &str,
    alias_line: String,
) -> Result<WizardOutcome> {
    match installer.install(shell_name, &alias_line) {
        Ok(path) => Ok(WizardOutcome::Installed(path)),
        Err(err) if err.is_recoverable() => {
            warn!(error = %err, "could not install alias automatically");
            println!("{}", err.user_message());
            println!("{}", manual_instructions(&alias_line));
            Ok(WizardOutcome::ManualFallback(alias_line))
        }
        Err(err) => Err(err),
    }
}

/// What to tell the user when we can't write the alias ourselves
pub fn manual_instructions(alias_line: &str) -> String {
    format!(
        "Try adding the following command to whatever file your shell runs \
         every time it starts:\n\n    {}\n",
        alias_line
    )
}

fn non_blank(answer: String) -> Value {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        Value::Absent
    } else {
        Value::Text(trimmed.to_string())
    }
}
