// Trie: insertion, exact lookup, prefix completion

use lexicon_core::character::fold_case;
use lexicon_core::enums::TraversalOrder;

use crate::node::{NodeId, TrieNode};
use crate::traversal::Completions;

/// A character trie mapping words to a terminal marker.
///
/// Nodes are stored in an arena owned by the trie; each child edge points
/// to a node that no other edge points to. Nothing is ever removed, so a
/// populated trie can be shared read-only across threads.
///
/// The trie stores exactly what it is given. Case normalization is the
/// caller's job on insertion; only [`prefixed_words`](Self::prefixed_words)
/// lowercases its argument.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Returns `true` if the word was not stored before. Inserting the
    /// empty string marks the root terminal.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = match self.nodes[current.index()].child(c) {
                Some(next) => next,
                None => {
                    let id = NodeId::new(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.index()].add_child(c, id);
                    id
                }
            };
        }
        let added = self.nodes[current.index()].set_terminal();
        if added {
            self.len += 1;
        }
        added
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_chars(word.chars())
    }

    /// Membership test over any character sequence.
    ///
    /// Used by suggestion generators, which build candidates in `char`
    /// buffers and should not have to allocate a `String` per probe.
    pub fn contains_chars<I>(&self, chars: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        self.find(chars)
            .is_some_and(|id| self.node(id).is_terminal())
    }

    /// Walk from the root along `chars`, returning the node reached.
    pub fn find<I>(&self, chars: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = NodeId::ROOT;
        for c in chars {
            current = self.node(current).child(c)?;
        }
        Some(current)
    }

    /// All stored words that start with `prefix`, in depth-first
    /// (lexicographic) order.
    ///
    /// The prefix is lowercased before the walk. An unknown prefix yields
    /// an empty list; the empty prefix yields every lowercase-reachable word.
    pub fn prefixed_words(&self, prefix: &str) -> Vec<String> {
        self.prefixed_words_with(prefix, TraversalOrder::DepthFirst)
    }

    /// Like [`prefixed_words`](Self::prefixed_words) with an explicit
    /// traversal order.
    pub fn prefixed_words_with(&self, prefix: &str, order: TraversalOrder) -> Vec<String> {
        self.completions(&fold_case(prefix), order).collect()
    }

    /// Lazily iterate the words below `prefix` without any case folding.
    pub fn completions(&self, prefix: &str, order: TraversalOrder) -> Completions<'_> {
        match self.find(prefix.chars()) {
            Some(start) => Completions::new(self, start, prefix.to_string(), order),
            None => Completions::empty(self),
        }
    }

    /// Every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.completions("", TraversalOrder::DepthFirst).collect()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word (not even the empty string) is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Access a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
