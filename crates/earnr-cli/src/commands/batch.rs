//! Batch command - analyze every text dump in a directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::warn;

use earnr_core::{KstClock, ReceiptAnalyzer, ReceiptParser};

use super::PlatformArg;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing recognized-text dumps
    #[arg(required = true)]
    dir: PathBuf,

    /// Glob pattern for input files
    #[arg(long, default_value = "*.txt")]
    pattern: String,

    /// Platform hint applied to every file
    #[arg(short, long, value_enum, default_value = "other")]
    platform: PlatformArg,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.dir.is_dir() {
        anyhow::bail!("not a directory: {}", args.dir.display());
    }

    let analyzer = ReceiptAnalyzer::with_config(config);
    let glob_pattern = args.dir.join(&args.pattern);

    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for entry in glob::glob(&glob_pattern.to_string_lossy())? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("skipping unreadable path: {e}");
                continue;
            }
        };

        let text = fs::read_to_string(&path)?;
        let analysis = analyzer.parse(&text, args.platform.into(), &KstClock);
        let result = &analysis.result;

        let verdict = if analysis.validation.is_valid {
            accepted += 1;
            style("ok").green().to_string()
        } else {
            rejected += 1;
            style("rejected").red().to_string()
        };

        println!(
            "{:40} {:8} {} {}원 {}건 [{}]",
            path.display(),
            verdict,
            result.period,
            result.amount,
            result.delivery_count,
            result.platform,
        );

        for warning in &analysis.validation.warnings {
            println!("    {} {warning}", style("warning:").yellow());
        }
    }

    let total = accepted + rejected;
    if total == 0 {
        println!("No files matched {}", glob_pattern.display());
    } else {
        println!(
            "\n{total} files: {} accepted, {} rejected",
            style(accepted).green(),
            style(rejected).red()
        );
    }

    Ok(())
}
