//! Dictionary Bot - Main Entry Point
//!
//! Reads chat lines from stdin, answers `dict` commands with WordNet
//! definitions and prints the replies.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use dict_bot::commands::{CommandHandler, CommandResult, DefinitionLookup};
use dict_bot::config::{BotSettings, MarkupStyle};
use dict_bot::lexicon::{JsonLexicon, LexiconFile};
use dict_bot::render::renderer_for;

/// Chat bot that looks up English words in WordNet.
#[derive(Parser, Debug)]
#[command(name = "dict_bot")]
#[command(about = "Look up word definitions from a WordNet lexicon")]
#[command(version)]
struct Args {
    /// Path to the JSON lexicon (overrides LEXICON_PATH).
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Reply markup: ao or plain (overrides DICT_MARKUP).
    #[arg(long)]
    markup: Option<MarkupStyle>,

    /// Look up a single term, print the reply and exit.
    #[arg(long, value_name = "TERM")]
    lookup: Option<String>,

    /// Generate an example lexicon file and exit.
    #[arg(long)]
    generate_lexicon: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    if args.generate_lexicon {
        return generate_example_lexicon();
    }

    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    let mut settings = BotSettings::from_env_with_defaults();
    if let Some(path) = args.lexicon {
        settings.lexicon_path = path;
    }
    if let Some(markup) = args.markup {
        settings.markup = markup;
    }

    let lexicon = JsonLexicon::load_from_file(&settings.lexicon_path).with_context(|| {
        format!(
            "Failed to load lexicon from {}",
            settings.lexicon_path.display()
        )
    })?;

    info!(
        "Lexicon ready: {} synsets (source: {})",
        lexicon.len(),
        lexicon.source().unwrap_or("unknown")
    );

    let dictionary = DefinitionLookup::new(Box::new(lexicon), renderer_for(&settings));
    let handler = Arc::new(CommandHandler::new(
        settings.command_prefix.clone(),
        dictionary,
    ));

    if let Some(term) = args.lookup {
        let line = format!("{}dict {term}", settings.command_prefix);
        let result = handler
            .try_handle(&line)
            .with_context(|| format!("'{term}' is not a valid search term"))?;
        print_result(&result);
        if !result.success {
            anyhow::bail!("Lookup failed");
        }
        return Ok(());
    }

    info!("Command prefix: {}", settings.command_prefix);
    info!(
        "Type '{}dict <word>' to look up a word. Use Ctrl+C to stop.",
        settings.command_prefix
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    info!("Input closed, shutting down...");
                    break;
                };

                // The lexicon query blocks, so it runs off the async workers.
                let handler = Arc::clone(&handler);
                match tokio::task::spawn_blocking(move || handler.try_handle(&line)).await {
                    Ok(Some(result)) => print_result(&result),
                    Ok(None) => debug!("Ignoring non-command message"),
                    Err(e) => warn!("Command task failed: {}", e),
                }
            }
        }
    }

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints every reply message, separated by blank lines.
fn print_result(result: &CommandResult) {
    for message in &result.messages {
        println!("{message}\n");
    }
}

/// Generates an example lexicon file.
fn generate_example_lexicon() -> Result<()> {
    let example = LexiconFile::example();
    example.save_to_file("lexicon.example.json")?;

    println!("✓ Example lexicon written to: lexicon.example.json");
    println!("\nTo use this bot:");
    println!("1. Copy lexicon.example.json to lexicon.json (or set LEXICON_PATH)");
    println!("2. Add the synsets you need");
    println!("3. Run: dict_bot, then type '!dict run'");

    Ok(())
}
