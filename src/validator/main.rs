//! Standalone validator for lexicon files.
//!
//! Checks a JSON lexicon for the problems that would stop the bot from
//! loading it and reports every offending synset.

use std::process::ExitCode;

use clap::Parser;

use dict_bot::lexicon::LexiconFile;

/// Lexicon file validator.
#[derive(Parser, Debug)]
#[command(name = "validate_lexicon")]
#[command(about = "Validates JSON lexicon files for the dictionary bot")]
#[command(version)]
struct Args {
    /// Path to the JSON lexicon to validate.
    #[arg(short, long, default_value = "lexicon.json")]
    file: String,

    /// Generate an example lexicon at the specified path.
    #[arg(long)]
    generate_example: Option<String>,

    /// Show every synset, not only the invalid ones.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(output_path) = args.generate_example {
        return generate_example(&output_path);
    }

    validate_lexicon(&args.file, args.verbose)
}

fn generate_example(output_path: &str) -> ExitCode {
    let example = LexiconFile::example();

    match example.save_to_file(output_path) {
        Ok(()) => {
            println!("✓ Example lexicon written to: {output_path}");
            println!("\nThe file contains {} example synsets.", example.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write example file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate_lexicon(path: &str, verbose: bool) -> ExitCode {
    println!("Validating: {path}");

    let lexicon = match LexiconFile::load_from_file(path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to load lexicon: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(source) = &lexicon.source {
        println!("Source: {source}");
    }
    println!();

    let results = lexicon.validate_all();
    let mut errors = 0;

    for (i, result) in results.iter().enumerate() {
        if verbose && let Some(synset) = lexicon.synsets.get(i) {
            let words: Vec<&str> = synset.lemmas().collect();
            println!(
                "[{i}] {} {{{}}} \"{}\"",
                synset.pos,
                words.join(", "),
                truncate(&synset.gloss, 40)
            );
        }

        match result {
            Ok(()) => {
                if verbose {
                    println!("  ✓ OK");
                }
            }
            Err(e) => {
                errors += 1;
                println!("  ✗ Error: {e}");
            }
        }
    }

    println!();

    let total = lexicon.len();

    if errors == 0 {
        println!("✓ All {total} synsets are valid!");
        ExitCode::SUCCESS
    } else {
        println!("✗ Validation failed: {errors} error(s) in {total} synsets");
        println!("  Valid: {}/{total}", total.saturating_sub(errors));
        ExitCode::FAILURE
    }
}

/// Truncates a string for display.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}
