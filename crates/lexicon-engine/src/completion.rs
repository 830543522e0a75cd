// Prefix completion over the dictionary trie

use lexicon_core::enums::TraversalOrder;
use lexicon_trie::Trie;

/// Returns every dictionary word that starts with a prefix.
///
/// The full set is always returned; display limits such as "top 10" are
/// applied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct PrefixCompleter<'a> {
    trie: &'a Trie,
}

impl<'a> PrefixCompleter<'a> {
    pub fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// Completions in depth-first (lexicographic) order. The prefix is
    /// lowercased.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.trie.prefixed_words(prefix)
    }

    /// Completions in the requested order.
    pub fn complete_with(&self, prefix: &str, order: TraversalOrder) -> Vec<String> {
        self.trie.prefixed_words_with(prefix, order)
    }
}
