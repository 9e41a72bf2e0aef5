//! Config command - show or initialize engine configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use earnr_core::EngineConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "earnr.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = super::load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path } => {
            EngineConfig::default().save(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
