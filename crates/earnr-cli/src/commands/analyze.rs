//! Analyze command - run one recognized-text dump through the pipeline.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use earnr_core::{Analysis, KstClock, ReceiptAnalyzer, ReceiptParser};

use super::PlatformArg;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file containing the recognized screen text
    #[arg(required = true)]
    input: PathBuf,

    /// Platform the rider selected in the app
    #[arg(short, long, value_enum, default_value = "other")]
    platform: PlatformArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let text = fs::read_to_string(&args.input)?;
    info!("analyzing {} ({} chars)", args.input.display(), text.chars().count());

    let analyzer = ReceiptAnalyzer::with_config(config);
    let analysis = analyzer.parse(&text, args.platform.into(), &KstClock);

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&analysis)?,
        OutputFormat::Text => render_text(&analysis),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(analysis: &Analysis) -> String {
    let result = &analysis.result;
    let validation = &analysis.validation;

    let verdict = if validation.is_valid {
        style("accepted").green().to_string()
    } else {
        style("rejected").red().to_string()
    };

    let mut lines = vec![
        format!("platform:   {}", result.platform),
        format!("period:     {}", result.period),
        format!("amount:     {}원", result.amount),
        format!("deliveries: {}", result.delivery_count),
        format!("confidence: {:.2}", result.confidence),
        format!("verdict:    {verdict}"),
    ];

    if let Some(breakdown) = &result.breakdown {
        lines.push(format!("daily rows: {}", breakdown.len()));
        for entry in breakdown {
            let count = entry
                .delivery_count
                .map_or_else(String::new, |c| format!(" ({c}건)"));
            lines.push(format!("  {} {}원{count}", entry.date, entry.amount));
        }
    }

    for warning in &validation.warnings {
        lines.push(format!("{} {warning}", style("warning:").yellow()));
    }

    lines.join("\n")
}
