// Trie node layout: arena slots with sorted child edges

/// Index of a node inside the trie arena.
///
/// Node 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node (empty string).
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of this node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One trie node: outgoing character edges plus the terminal flag.
///
/// Edges are kept sorted by character so lookups can binary search and
/// traversals come out in lexicographic order. Every node except the root
/// has exactly one incoming edge.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: Vec<(char, NodeId)>,
    terminal: bool,
}

impl TrieNode {
    /// Whether the path from the root to this node spells a stored word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self) -> bool {
        let was = self.terminal;
        self.terminal = true;
        !was
    }

    /// Look up the child reached by `c`.
    #[inline]
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Outgoing edges in ascending character order.
    #[inline]
    pub fn children(&self) -> &[(char, NodeId)] {
        &self.children
    }

    /// Insert an edge `c -> id`. The caller guarantees `c` is not present.
    pub(crate) fn add_child(&mut self, c: char, id: NodeId) {
        match self.children.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(_) => debug_assert!(false, "duplicate edge {c:?}"),
            Err(pos) => self.children.insert(pos, (c, id)),
        }
    }
}
