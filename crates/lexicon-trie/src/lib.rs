//! Arena-backed character trie.
//!
//! Stores a word list for exact lookup and prefix completion. Built once,
//! read many times: nothing is ever removed, and all read operations take
//! `&self`, so a populated [`Trie`] is `Send + Sync` and can be shared
//! between threads without locking.
//!
//! # Architecture
//!
//! - [`node`] -- node layout (sorted child edges, terminal flag)
//! - [`trie`] -- insertion, lookup, prefix walks
//! - [`traversal`] -- iterative depth-first / breadth-first subtree walks

pub mod node;
pub mod traversal;
pub mod trie;

pub use node::{NodeId, TrieNode};
pub use traversal::Completions;
pub use trie::Trie;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn trie_is_send_and_sync() {
        assert_send_sync::<Trie>();
    }
}
