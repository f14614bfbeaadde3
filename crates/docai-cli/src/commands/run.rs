//! Run command - process every PDF under the configured input folder.

use std::time::Instant;

use console::style;

use docai_core::models::config::DocAiConfig;
use docai_core::{DocAiClient, DocumentExtractor, FolderBatchRunner};

pub async fn run() -> anyhow::Result<()> {
    let start = Instant::now();

    // Validate the environment before touching any document.
    let config = DocAiConfig::from_env()?;

    println!(
        "{} Processing folder {} with processor {}",
        style("ℹ").blue(),
        config.input_folder.display(),
        config.processor.processor_id
    );

    let client = DocAiClient::new(&config.processor, config.access_token.clone());
    let extractor = DocumentExtractor::new(client, config.processor.processor_id.clone());
    let runner = FolderBatchRunner::new(config.input_folder.clone(), extractor);

    let outcome = runner.run().await?;

    let total = outcome.processed.len() + outcome.failed.len();
    println!();
    println!(
        "{} Processed {} documents in {:?}",
        style("✓").green(),
        total,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(outcome.processed.len()).green(),
        style(outcome.failed.len()).red()
    );

    if !outcome.failed.is_empty() {
        println!();
        println!("{}", style("Failed documents:").red());
        for failure in &outcome.failed {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}
