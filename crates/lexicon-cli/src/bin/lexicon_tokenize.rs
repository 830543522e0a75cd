// lexicon-tokenize: Tokenize text from stdin.
//
// Prints one line per token with its type and character span:
//   WORD          [   0..   5]: Hello

use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use clap::Parser;
use lexicon_core::enums::TokenType;
use lexicon_engine::tokenizer;

/// Split stdin text into word, whitespace and punctuation tokens.
#[derive(Debug, Parser)]
#[command(name = "lexicon-tokenize", version, about)]
struct Cli {
    /// Print word tokens only.
    #[arg(short, long)]
    words: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexicon_cli::init_tracing(cli.verbose);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let tokens = if cli.words {
        tokenizer::word_tokens(&input)
    } else {
        tokenizer::tokenize(&input)
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for token in tokens {
        let type_str = match token.token_type {
            TokenType::Word => "WORD",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Unknown => "UNKNOWN",
            TokenType::None => "NONE",
        };
        let display_text = token
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        writeln!(
            out,
            "{type_str:13} [{:>4}..{:>4}]: {display_text}",
            token.pos,
            token.end()
        )?;
    }
    out.flush()?;
    Ok(())
}
