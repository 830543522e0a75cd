// lexicon-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is in the dictionary:
//   C: word    (correct)
//   W: word    (wrong / unknown)
// With --suggest every W line is followed by its suggestions:
//   S: suggestion

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use lexicon_cli::DictArgs;

/// Check spelling of words read from stdin, one per line.
#[derive(Debug, Parser)]
#[command(name = "lexicon-spell", version, about)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Also print suggestions for unknown words.
    #[arg(short, long)]
    suggest: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexicon_cli::init_tracing(cli.dict.verbose);

    let handle = lexicon_cli::load_handle(&cli.dict).unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if handle.is_known(word) {
            writeln!(out, "C: {word}")?;
        } else {
            writeln!(out, "W: {word}")?;
            if cli.suggest {
                for suggestion in handle.suggestions_for(word) {
                    writeln!(out, "S: {suggestion}")?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
