// Subtree traversal with an explicit frontier
//
// Completions are collected without recursion. Depth-first order keeps one
// shared word buffer: each stack entry records how long the buffer was at
// its parent, so popping it truncates back and appends one character.
// Breadth-first order cannot share a buffer; each queued node instead
// points at a parent link, and a word is spelled out only when a terminal
// node is reached. Either way the work is linear in the subtree size plus
// the length of the emitted words, and both orders report the same set.

use std::collections::VecDeque;

use lexicon_core::enums::TraversalOrder;

use crate::node::NodeId;
use crate::trie::Trie;

/// One edge on the path to a queued node: its character and the link of
/// the parent node (`None` for the start node).
type Link = (char, Option<usize>);

enum Frontier {
    Stack {
        word: String,
        /// (node, buffer length at the parent, edge character)
        pending: Vec<(NodeId, usize, Option<char>)>,
    },
    Queue {
        prefix: String,
        pending: VecDeque<(NodeId, Option<usize>)>,
        links: Vec<Link>,
    },
}

/// Iterator over every stored word below a starting node.
///
/// Created by [`Trie::completions`]. Each item is the starting prefix
/// followed by the path to a terminal descendant (the start node itself
/// included when it is terminal).
pub struct Completions<'a> {
    trie: &'a Trie,
    frontier: Frontier,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(trie: &'a Trie, start: NodeId, prefix: String, order: TraversalOrder) -> Self {
        let frontier = match order {
            TraversalOrder::DepthFirst => Frontier::Stack {
                pending: vec![(start, prefix.len(), None)],
                word: prefix,
            },
            TraversalOrder::BreadthFirst => Frontier::Queue {
                prefix,
                pending: VecDeque::from([(start, None)]),
                links: Vec::new(),
            },
        };
        Self { trie, frontier }
    }

    pub(crate) fn empty(trie: &'a Trie) -> Self {
        Self {
            trie,
            frontier: Frontier::Stack {
                word: String::new(),
                pending: Vec::new(),
            },
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match &mut self.frontier {
                Frontier::Stack { word, pending } => {
                    let (id, keep, edge) = pending.pop()?;
                    word.truncate(keep);
                    if let Some(c) = edge {
                        word.push(c);
                    }
                    let len = word.len();
                    let node = self.trie.node(id);
                    // Reverse push so the smallest character is popped first.
                    for &(c, child) in node.children().iter().rev() {
                        pending.push((child, len, Some(c)));
                    }
                    if node.is_terminal() {
                        return Some(word.clone());
                    }
                }
                Frontier::Queue {
                    prefix,
                    pending,
                    links,
                } => {
                    let (id, link) = pending.pop_front()?;
                    let node = self.trie.node(id);
                    for &(c, child) in node.children() {
                        links.push((c, link));
                        pending.push_back((child, Some(links.len() - 1)));
                    }
                    if node.is_terminal() {
                        return Some(spell_path(prefix, links, link));
                    }
                }
            }
        }
    }
}

/// Rebuild the word for a queued node by following parent links.
fn spell_path(prefix: &str, links: &[Link], mut link: Option<usize>) -> String {
    let mut tail = Vec::new();
    while let Some(i) = link {
        let (c, parent) = links[i];
        tail.push(c);
        link = parent;
    }
    let mut word = String::with_capacity(prefix.len() + tail.len());
    word.push_str(prefix);
    word.extend(tail.iter().rev());
    word
}
