// Spell checking seam between the dictionary and the suggestion generators

use lexicon_trie::Trie;

/// Trait for spellers.
///
/// Implementations take a word as a `char` slice (for random-access
/// indexing into character positions) and report whether it is a known
/// dictionary word. The word is compared exactly; callers lowercase
/// beforehand.
pub trait Speller {
    /// Check whether the given word is in the dictionary.
    fn spell(&self, word: &[char]) -> bool;
}

impl Speller for Trie {
    fn spell(&self, word: &[char]) -> bool {
        self.contains_chars(word.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn trie_speller_accepts_stored_words() {
        let trie: Trie = ["cat", "cats"].into_iter().collect();
        assert!(trie.spell(&chars("cat")));
        assert!(trie.spell(&chars("cats")));
        assert!(!trie.spell(&chars("ca")));
        assert!(!trie.spell(&[]));
    }

    #[test]
    fn trie_speller_through_trait_object() {
        let trie: Trie = ["dog"].into_iter().collect();
        let speller: &dyn Speller = &trie;
        assert!(speller.spell(&chars("dog")));
        assert!(!speller.spell(&chars("Dog")));
    }
}
