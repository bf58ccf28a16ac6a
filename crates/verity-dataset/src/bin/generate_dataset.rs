//! Generate a synthetic labeled dataset and write it as JSON Lines.
//!
//! Usage: `generate-dataset [output-path] [math-pairs]`

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use verity_dataset::jsonl;
use verity_dataset::CorpusGenerator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "data/dataset.jsonl".to_string());
    let math_pairs: usize = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("math-pairs must be a number, got '{raw}'"))?,
        None => 250,
    };

    if let Some(parent) = std::path::Path::new(&output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    let mut generator = CorpusGenerator::new();
    let added = generator.generate_all(math_pairs);
    jsonl::write_jsonl(&output, generator.records())
        .with_context(|| format!("writing dataset to {output}"))?;

    info!(output = %output, records = added, "dataset written");
    Ok(())
}
