// Dictionary loading: one word per line into a fresh trie
//
// This is the only place a trie is populated. The handle calls
// `build_dictionary` once at startup and never mutates the result.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use lexicon_core::enums::CaseMode;
use lexicon_trie::Trie;
use tracing::{debug, info, warn};

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be opened.
    #[error("dictionary source {} cannot be opened: {source}", path.display())]
    SourceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list was opened but a line could not be read
    /// (for example it is not valid UTF-8).
    #[error("failed to read dictionary line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Options applied while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Case handling for each entry. Defaults to lowercasing, which keeps
    /// entries consistent with the lowercased queries of the handle.
    pub case_mode: CaseMode,
}

impl LoadOptions {
    /// Options that store entries exactly as written.
    pub fn preserve_case() -> Self {
        Self {
            case_mode: CaseMode::Preserve,
        }
    }
}

/// Counters collected while loading, reported through `tracing`.
#[derive(Debug, Default)]
struct LoadCounters {
    lines: usize,
    blank: usize,
    duplicates: usize,
}

/// Insert one raw line into the trie.
///
/// Surrounding whitespace (including a stray `\r`) is trimmed; blank lines
/// are skipped. Anything else is inserted as-is after case handling, with
/// no validation of its characters.
fn insert_line(trie: &mut Trie, line: &str, options: &LoadOptions, counters: &mut LoadCounters) {
    counters.lines += 1;
    let word = line.trim();
    if word.is_empty() {
        counters.blank += 1;
        return;
    }
    if !trie.insert(&options.case_mode.apply(word)) {
        counters.duplicates += 1;
    }
}

/// Drop a UTF-8 byte-order mark. Only the first line can carry one.
fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{FEFF}').unwrap_or(line)
}

fn finish(trie: Trie, counters: &LoadCounters) -> Trie {
    debug!(
        lines = counters.lines,
        blank = counters.blank,
        duplicates = counters.duplicates,
        "dictionary lines processed"
    );
    if trie.is_empty() {
        warn!("dictionary contains no words");
    }
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        "dictionary loaded"
    );
    trie
}

/// Build the dictionary trie from a word-list file.
///
/// Returns [`DictionaryError::SourceMissing`] if the file cannot be opened.
/// The caller decides whether that disables spelling features or aborts.
pub fn build_dictionary(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Trie, DictionaryError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading dictionary");
    let file = File::open(path).map_err(|source| DictionaryError::SourceMissing {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file), options)
}

/// Build a trie from any line-oriented reader.
///
/// Accepts LF and CRLF line endings. Line numbers in errors are 1-based.
pub fn load_from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Trie, DictionaryError> {
    let mut trie = Trie::new();
    let mut counters = LoadCounters::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read {
            line: index + 1,
            source,
        })?;
        let line = if index == 0 { strip_bom(&line) } else { &line };
        insert_line(&mut trie, line, options, &mut counters);
    }
    Ok(finish(trie, &counters))
}

/// Build a trie from an in-memory word list.
pub fn load_from_str(text: &str, options: &LoadOptions) -> Trie {
    let mut trie = Trie::new();
    let mut counters = LoadCounters::default();
    for line in strip_bom(text).lines() {
        insert_line(&mut trie, line, options, &mut counters);
    }
    finish(trie, &counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn trims_and_skips_blank_lines() {
        let trie = load_from_str("  cat \n\n\t\ndog\t\n", &LoadOptions::default());
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn accepts_crlf() {
        let trie = load_from_reader(Cursor::new("cat\r\ndog\r\n"), &LoadOptions::default()).unwrap();
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("cat\r"));
    }

    #[test]
    fn leading_byte_order_mark_is_dropped() {
        let trie = load_from_reader(Cursor::new("\u{FEFF}cat\ndog\n"), &LoadOptions::default()).unwrap();
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
        assert_eq!(trie.words(), vec!["cat", "dog"]);

        let trie = load_from_str("\u{FEFF}Cat\r\ndog\r\n", &LoadOptions::default());
        assert!(trie.contains("cat"));
        assert!(!trie.contains("\u{FEFF}cat"));
    }

    #[test]
    fn byte_order_mark_after_first_line_is_kept() {
        let trie = load_from_str("cat\n\u{FEFF}dog\n", &LoadOptions::default());
        assert!(trie.contains("\u{FEFF}dog"));
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn lowercases_by_default() {
        let trie = load_from_str("Paris\nNASA\n", &LoadOptions::default());
        assert!(trie.contains("paris"));
        assert!(trie.contains("nasa"));
        assert!(!trie.contains("Paris"));
    }

    #[test]
    fn preserve_case_keeps_entries_verbatim() {
        let trie = load_from_str("Paris\n", &LoadOptions::preserve_case());
        assert!(trie.contains("Paris"));
        assert!(!trie.contains("paris"));
    }

    #[test]
    fn malformed_lines_are_inserted_verbatim() {
        let trie = load_from_str("e-mail\nr2d2\nit's\n", &LoadOptions::default());
        assert!(trie.contains("e-mail"));
        assert!(trie.contains("r2d2"));
        assert!(trie.contains("it's"));
    }

    #[test]
    fn duplicates_collapse() {
        let trie = load_from_str("cat\ncat\nCAT\n", &LoadOptions::default());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn missing_file_is_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dictionary.txt");
        let err = build_dictionary(&path, &LoadOptions::default()).unwrap_err();
        match err {
            DictionaryError::SourceMissing { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected SourceMissing, got: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "cats").unwrap();
        let trie = build_dictionary(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"cat\n\xff\xfe\n";
        let err = load_from_reader(Cursor::new(bytes), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { line: 2, .. }));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = DictionaryError::SourceMissing {
            path: PathBuf::from("dictionary.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("dictionary source dictionary.txt cannot be opened"));
    }

    #[test]
    fn loading_twice_gives_equivalent_tries() {
        let text = "cat\ncats\nbat\ncan\n";
        let a = load_from_str(text, &LoadOptions::default());
        let b = load_from_str(text, &LoadOptions::default());
        assert_eq!(a.words(), b.words());
        assert_eq!(a.node_count(), b.node_count());
    }
}
