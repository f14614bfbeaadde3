//! Process command - extract entities from a single PDF file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use docai_core::models::config::DocAiConfig;
use docai_core::{DocAiClient, DocumentExtractor};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory (default: alongside the input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = DocAiConfig::from_env()?;

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Submitting to processor...");
    pb.set_position(20);

    let client = DocAiClient::new(&config.processor, config.access_token.clone());
    let extractor = DocumentExtractor::new(client, config.processor.processor_id.clone());

    let artifacts = extractor.process(&args.input, &output_dir).await?;

    pb.set_position(100);
    pb.finish_with_message("Done");

    println!(
        "{} Document saved to {}",
        style("✓").green(),
        artifacts.document.display()
    );
    println!(
        "{} Entity report written to {}",
        style("✓").green(),
        artifacts.report.display()
    );
    println!(
        "{} Low-confidence report written to {}",
        style("✓").green(),
        artifacts.low_confidence.display()
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
