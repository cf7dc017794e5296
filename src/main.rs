//! Typograf CLI binary.
//!
//! Run with: `typograf --text '"Hello" - world...'`
//! or: `typograf --file res/values/strings.xml --offset 120 --in-place`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use typograf::resource::{find_translatable_at, replace_value};
use typograf::{TypografClient, TypografConfig};

/// Typography correction for XML string resources.
///
/// Sends text to the ArtLebedev Typograf SOAP service and applies the
/// corrected result. Either corrects a literal string, or locates the
/// `<string>`/`<item>` element under a byte offset in a resource file and
/// rewrites its value. On any service failure the text is left as-is.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long, default_value = "typograf.yaml")]
    config: PathBuf,

    /// Literal text to correct (prints the result to stdout)
    #[arg(short, long, conflicts_with_all = ["file", "offset"])]
    text: Option<String>,

    /// XML resource file containing the element to correct
    #[arg(short, long, requires = "offset")]
    file: Option<PathBuf>,

    /// Byte offset of the caret inside the resource file
    #[arg(short, long, requires = "file")]
    offset: Option<usize>,

    /// Rewrite the resource file instead of printing the updated document
    #[arg(short, long)]
    in_place: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.parse().unwrap_or(Level::WARN);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = if args.config.exists() {
        TypografConfig::load(&args.config).context("Failed to load config file")?
    } else {
        info!("Config file not found, using defaults");
        TypografConfig::default()
    };

    let client = TypografClient::new(config).context("Failed to build HTTP client")?;

    if let Some(text) = args.text {
        println!("{}", client.correct(&text));
        return Ok(());
    }

    let (file, offset) = match (args.file, args.offset) {
        (Some(file), Some(offset)) => (file, offset),
        _ => anyhow::bail!("Either --text or --file with --offset is required"),
    };

    let document = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let span = find_translatable_at(&document, offset, &client.config().resource.supported_tags)
        .with_context(|| {
            format!(
                "No translatable element at offset {} in {}",
                offset,
                file.display()
            )
        })?;

    info!(tag = %span.tag, "Correcting element value");
    let corrected = client.correct(&span.value);

    if corrected == span.value {
        // Service failure or nothing to fix: leave the document as it was.
        info!("Text unchanged, no edit applied");
        if !args.in_place {
            print!("{}", document);
        }
        return Ok(());
    }

    let updated = replace_value(&document, &span, &corrected);

    if args.in_place {
        fs::write(&file, updated)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        info!("Updated {}", file.display());
    } else {
        print!("{}", updated);
    }

    Ok(())
}
