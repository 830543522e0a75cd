// lexicon-complete: Prefix completion as shown in an editor popup.
//
// Prints the first N completions (default 10) for each PREFIX. The engine
// always computes the full set; --limit only trims what is displayed.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use lexicon_cli::DictArgs;
use lexicon_core::enums::TraversalOrder;

/// List dictionary words starting with each prefix.
#[derive(Debug, Parser)]
#[command(name = "lexicon-complete", version, about)]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Maximum number of completions printed per prefix (0 = all).
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// Walk the trie level by level, so shorter words come first.
    #[arg(long)]
    breadth_first: bool,

    /// Prefixes to complete.
    #[arg(required = true)]
    prefixes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexicon_cli::init_tracing(cli.dict.verbose);

    let handle = lexicon_cli::load_handle(&cli.dict).unwrap_or_else(|e| lexicon_cli::fatal(&e.to_string()));
    let order = if cli.breadth_first {
        TraversalOrder::BreadthFirst
    } else {
        TraversalOrder::DepthFirst
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for prefix in &cli.prefixes {
        let completions = handle.completions_with(prefix, order);
        let shown = if cli.limit == 0 {
            completions.len()
        } else {
            cli.limit.min(completions.len())
        };
        writeln!(out, "{prefix}: {} of {}", shown, completions.len())?;
        for word in completions.iter().take(shown) {
            writeln!(out, "  {word}")?;
        }
    }
    out.flush()?;
    Ok(())
}
