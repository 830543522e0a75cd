// lexicon-check: Spell check a whole document.
//
// Reads FILE (or stdin) and prints every distinct unknown word, in order of
// first occurrence, followed by its suggestions:
//   dg: dog
//   caat: cant, cart, cat
//   teh: (no suggestions)

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lexicon_cli::DictArgs;
use tracing::info;

/// Report unknown words in a document with their suggestions.
#[derive(Debug, Parser)]
#[command(name = "lexicon-check", version, about)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Document to check. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Exit with status 2 when unknown words are found.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexicon_cli::init_tracing(cli.dict.verbose);

    let handle = lexicon_cli::load_handle(&cli.dict).unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let report = handle.check_document(&text);
    info!(
        words = report.word_tokens(),
        distinct = report.distinct_words(),
        unknown = report.len(),
        case_mode = ?handle.options().load.case_mode,
        "document checked"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    for entry in &report {
        if entry.suggestions.is_empty() {
            writeln!(out, "{}: (no suggestions)", entry.word)?;
        } else {
            let joined: Vec<&str> = entry.suggestions.iter().map(String::as_str).collect();
            writeln!(out, "{}: {}", entry.word, joined.join(", "))?;
        }
    }
    out.flush()?;

    if cli.strict && !report.is_empty() {
        std::process::exit(2);
    }
    Ok(())
}
