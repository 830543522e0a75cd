// lexicon-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use lexicon_engine::dictionary::LoadOptions;
use lexicon_engine::handle::{HandleOptions, LexiconError, LexiconHandle};
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up in the default locations.
const DICTIONARY_FILE: &str = "dictionary.txt";

/// Environment variable naming the dictionary file.
pub const DICTIONARY_ENV: &str = "LEXICON_DICTIONARY";

/// Options shared by every tool: where the dictionary is, how it is loaded,
/// and how chatty the log output is.
#[derive(Debug, Clone, Args)]
pub struct DictArgs {
    /// Dictionary word list (one word per line).
    #[arg(short = 'd', long = "dict", value_name = "PATH", env = DICTIONARY_ENV)]
    pub dict: Option<PathBuf>,

    /// Store dictionary entries with their original case instead of
    /// lowercasing them.
    #[arg(long)]
    pub preserve_case: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DictArgs {
    /// Handle options implied by the flags.
    pub fn handle_options(&self) -> HandleOptions {
        let load = if self.preserve_case {
            LoadOptions::preserve_case()
        } else {
            LoadOptions::default()
        };
        HandleOptions {
            load,
            ..HandleOptions::default()
        }
    }
}

/// Install the stderr log subscriber for a tool.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary and create a LexiconHandle.
///
/// An explicit path (from `--dict` or `LEXICON_DICTIONARY`) is loaded
/// directly, so a typo is reported instead of silently falling back.
/// Otherwise the default locations are tried in order:
/// 1. `~/.lexicon/dictionary.txt`
/// 2. `/usr/share/lexicon/dictionary.txt`
/// 3. `./dictionary.txt`
pub fn load_handle(args: &DictArgs) -> Result<LexiconHandle, LexiconError> {
    let options = args.handle_options();
    match &args.dict {
        Some(path) => LexiconHandle::from_path(path, options),
        None => LexiconHandle::discover(&default_search_paths(), options),
    }
}

/// Build the list of default dictionary locations.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexicon").join(DICTIONARY_FILE));
    }

    paths.push(Path::new("/usr/share/lexicon").join(DICTIONARY_FILE));

    // Current directory (fallback for local development)
    paths.push(PathBuf::from(DICTIONARY_FILE));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
