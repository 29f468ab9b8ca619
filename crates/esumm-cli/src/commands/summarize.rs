use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use esumm_core::{AppConfig, Summarizer};

pub async fn run(config: Arc<AppConfig>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        bail!("Please enter some text to summarize.");
    }

    let summarizer = Summarizer::new(&config)?;
    let info = summarizer.summarize(&text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.summarized_text);
    println!();
    println!(
        "Sentences: {} -> {}",
        info.original_sentence_count, info.summarized_sentence_count
    );
    println!(
        "Words:     {} -> {}",
        info.original_word_count, info.summarized_word_count
    );
    println!("Reduction: {:.2}%", info.reduction_rate * 100.0);

    Ok(())
}
