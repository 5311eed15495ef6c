use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use emoji_strip::config::Config;
use emoji_strip::output::terminal;
use emoji_strip::{ScanReport, StripOptions, Stripper};

/// emoji-strip: remove or replace emojis and emoticons in text.
///
/// Reads the named files (or stdin) and writes the stripped text to stdout.
#[derive(Parser)]
#[command(name = "emoji-strip", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip emojis (and optionally emoticons) and print the result
    Strip(FilterArgs),

    /// Report what would be stripped without printing the text
    Scan(FilterArgs),

    /// List the Unicode ranges treated as emoji
    Ranges,
}

#[derive(Args)]
struct FilterArgs {
    /// Also remove ASCII emoticons like :) and <3
    #[arg(long)]
    emoticons: bool,

    /// Leave Unicode emojis in place
    #[arg(long)]
    keep_emojis: bool,

    /// Literal text to keep even if it matches (repeatable)
    #[arg(long = "preserve", value_name = "TEXT")]
    preserve: Vec<String>,

    /// Put this in place of each removed match
    #[arg(long, value_name = "TEXT")]
    replace_with: Option<String>,

    /// JSON options file (removeEmojis, removeEmoticons, preserve, replaceWith)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Files to read (stdin when omitted)
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the stripped text
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("emoji_strip=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Strip(args) => {
            let stripper = Stripper::new(resolve_options(&args)?);
            let inputs = read_inputs(&args.files)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for (label, text) in &inputs {
                let stripped = stripper.strip(text);
                debug!(input = %label, before = text.len(), after = stripped.len(), "Stripped input");
                out.write_all(stripped.as_bytes())
                    .context("Failed to write to stdout")?;
            }
            out.flush().context("Failed to flush stdout")?;
        }

        Commands::Scan(args) => {
            let stripper = Stripper::new(resolve_options(&args)?);
            let inputs = read_inputs(&args.files)?;

            let mut total = ScanReport::default();
            for (label, text) in &inputs {
                let (stripped, report) = stripper.strip_with_report(text);
                terminal::display_scan_report(label, &report, &stripped);

                total.emoji_runs += report.emoji_runs;
                total.emoji_chars += report.emoji_chars;
                total.emoticons += report.emoticons;
                total.preserved += report.preserved;
            }

            if inputs.len() > 1 {
                terminal::display_scan_totals(inputs.len(), &total);
            }
        }

        Commands::Ranges => {
            terminal::display_ranges(emoji_strip::tables::ranges::EMOJI_RANGES);
        }
    }

    Ok(())
}

/// Layer options: JSON file, then environment, then command-line flags.
fn resolve_options(args: &FilterArgs) -> Result<StripOptions> {
    let config = Config::load();
    let mut options = config.resolve(args.options.as_ref())?;

    if args.emoticons {
        options.remove_emoticons = true;
    }
    if args.keep_emojis {
        options.remove_emojis = false;
    }
    if let Some(replacement) = &args.replace_with {
        options.replace_with = replacement.clone();
    }
    options = options.preserve(args.preserve.iter().cloned());

    info!(
        remove_emojis = options.remove_emojis,
        remove_emoticons = options.remove_emoticons,
        preserve = options.preserve.len(),
        "Resolved strip options"
    );

    Ok(options)
}

/// Read each file in full, or stdin when no files were named.
fn read_inputs(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}
