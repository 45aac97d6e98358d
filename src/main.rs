//! CLI for turning a script into slides.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scriptdeck::{
    flagged_positions, paragraphs_from_text, FastEmbedder, LineBudget, SegmenterConfig,
    SlideSegmenter,
};

/// Split a narration script into slide-sized chunks.
#[derive(Parser, Debug)]
#[command(name = "scriptdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file; paragraphs separated by blank lines (default: stdin)
    input: Option<PathBuf>,

    /// Maximum wrapped lines per slide
    #[arg(short = 'l', long, default_value = "4")]
    max_lines: usize,

    /// Maximum characters per line
    #[arg(short = 'c', long, default_value = "18")]
    max_chars: usize,

    /// Minimum cosine similarity to keep adjacent segments together
    #[arg(short, long, default_value = "0.85")]
    threshold: f32,

    /// Cap on merged segment length, in characters
    #[arg(long, default_value = "200")]
    max_segment_chars: usize,

    /// Fold short slides into their successor
    #[arg(long)]
    compact: bool,

    /// Print slides as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let text = read_input(args.input.as_ref())?;
    let paragraphs = paragraphs_from_text(&text);
    if paragraphs.is_empty() {
        anyhow::bail!("no text to segment");
    }

    let budget = LineBudget::new(args.max_lines, args.max_chars)?;
    let config = SegmenterConfig::new(budget)
        .with_threshold(args.threshold)?
        .with_max_segment_chars(args.max_segment_chars)?
        .with_compaction(args.compact);

    let embedder = FastEmbedder::new().context("Failed to load embedding model")?;
    let slides = SlideSegmenter::new(config)
        .segment(&paragraphs, &embedder)
        .context("Failed to segment script")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slides)?);
    } else {
        for (i, slide) in slides.iter().enumerate() {
            println!("--- slide {} ---", i + 1);
            println!("{slide}");
        }
    }

    eprintln!("{} slides", slides.len());
    let flagged: Vec<usize> = flagged_positions(&slides).iter().map(|i| i + 1).collect();
    if !flagged.is_empty() {
        eprintln!("slides needing review: {flagged:?}");
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
