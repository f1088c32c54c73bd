// ideaseed-config - saves your favourite ideaseed flags as a shell alias
//
// This is the main entry point. Parses CLI args, sets up logging and runs the wizard.

use anyhow::Context;
use clap::Parser;
use ideaseed_config_lib::{
    shell::AliasInstaller,
    wizard::{run_wizard, DialoguerPrompter, WizardOptions, WizardOutcome},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Interactive setup for ideaseed: answers become an alias in your shell startup file
#[derive(Parser, Debug)]
#[command(name = "ideaseed-config", version, about)]
struct Cli {
    /// Shell to install the alias for (default: taken from $SHELL)
    #[arg(long, value_name = "NAME")]
    shell: Option<String>,

    /// Name of the alias (skips the question)
    #[arg(long = "alias", value_name = "NAME")]
    alias_name: Option<String>,

    /// Only print the alias line, don't touch any file
    #[arg(long)]
    dry_run: bool,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "starting wizard");

    let mut prompter = DialoguerPrompter::new();
    let options = WizardOptions {
        shell: cli.shell,
        alias_name: cli.alias_name,
        dry_run: cli.dry_run,
    };

    let outcome = run_wizard(&mut prompter, &options, AliasInstaller::new)
        .inspect_err(|e| {
            error!("wizard failed: {}", e);
            eprintln!("✗ Setup failed: {}", e.user_message());
        })
        .context("Setup failed")?;

    match outcome {
        WizardOutcome::Installed(path) => {
            println!("✓ Alias saved to {}", path.display());
        }
        WizardOutcome::ManualFallback(_) => {
            // Instructions were already printed, nothing else to say
        }
        WizardOutcome::Printed(_) => {
            println!("Dry run: nothing was written.");
        }
    }

    Ok(())
}

// Logs go to stderr so they never mix with the alias line on stdout
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
