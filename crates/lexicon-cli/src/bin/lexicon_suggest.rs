// lexicon-suggest: Print single-edit suggestions for words.
//
// Words come from the command line, or from stdin (one per line) when no
// WORD argument is given. Known words are printed as-is.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use lexicon_cli::DictArgs;
use lexicon_engine::handle::LexiconHandle;

/// Suggest dictionary words one substitution, deletion or insertion away.
#[derive(Debug, Parser)]
#[command(name = "lexicon-suggest", version, about)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Words to suggest for. Reads stdin when empty.
    words: Vec<String>,
}

fn suggest_word(word: &str, handle: &LexiconHandle, out: &mut impl Write) -> io::Result<()> {
    if handle.is_known(word) {
        return writeln!(out, "{word} (correct)");
    }
    let suggestions = handle.suggestions_for(word);
    if suggestions.is_empty() {
        writeln!(out, "{word}: (no suggestions)")
    } else {
        writeln!(out, "{word}:")?;
        for s in &suggestions {
            writeln!(out, "  {s}")?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexicon_cli::init_tracing(cli.dict.verbose);

    let handle = lexicon_cli::load_handle(&cli.dict).unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
    let mut out = BufWriter::new(io::stdout().lock());

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, &mut out)?;
        }
    } else {
        for word in &cli.words {
            suggest_word(word, &handle, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
