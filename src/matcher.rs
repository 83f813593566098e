//! Multi-pattern literal key matching.
//!
//! This module implements the core search engine: an Aho-Corasick automaton
//! built once from the dictionary keys, then queried against file contents.
//! A single left-to-right pass over a text reports every key that occurs as a
//! contiguous substring, including keys that overlap or contain one another,
//! in `O(len(text) + matches)` time regardless of how many keys are loaded.

use std::collections::{HashMap, HashSet, VecDeque};

const ROOT: u32 = 0;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<u8, u32>,
    /// Longest proper suffix of this node's path that is also a path prefix.
    fail: u32,
    /// Key index if a key ends exactly at this node.
    key: Option<u32>,
    /// Nearest fail-chain ancestor that ends a key; `ROOT` means none
    /// (keys are non-empty, so no key can end at the root).
    dict: u32,
}

/// An immutable automaton matching a fixed set of literal keys.
///
/// Built once per run via [`KeyMatcher::build`], then shared freely:
/// querying never mutates the automaton, so `&KeyMatcher` can be handed to
/// parallel workers without synchronization.
#[derive(Debug)]
pub struct KeyMatcher {
    nodes: Vec<Node>,
    keys: Vec<String>,
}

impl KeyMatcher {
    /// Build an automaton from an ordered sequence of keys.
    ///
    /// Duplicate keys are silently deduplicated (the first occurrence keeps
    /// its position in the reported order) and empty strings are ignored,
    /// since an empty pattern would trivially match every text. An empty
    /// key sequence is legal and yields an automaton that matches nothing.
    pub fn build<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matcher = Self {
            nodes: vec![Node::default()],
            keys: Vec::new(),
        };

        let mut seen: HashSet<String> = HashSet::new();
        for key in keys {
            let key = key.into();
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            matcher.insert(key);
        }

        matcher.link();
        matcher
    }

    /// The deduplicated keys, in their original order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of distinct keys in the automaton.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// One-shot query: indices of all keys occurring in `text`.
    pub fn find(&self, text: &str) -> HashSet<usize> {
        let mut scan = self.scanner();
        scan.feed(text.as_bytes());
        scan.into_found()
    }

    /// Start a streaming scan. State is carried across [`MatchScan::feed`]
    /// calls, so a key split across two chunks is still detected.
    pub fn scanner(&self) -> MatchScan<'_> {
        MatchScan {
            matcher: self,
            state: ROOT,
            found: vec![false; self.keys.len()],
            found_count: 0,
        }
    }

    fn insert(&mut self, key: String) {
        let mut node = ROOT;
        for &byte in key.as_bytes() {
            node = match self.nodes[node as usize].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[node as usize].children.insert(byte, child);
                    child
                }
            };
        }
        self.nodes[node as usize].key = Some(self.keys.len() as u32);
        self.keys.push(key);
    }

    /// Compute failure and dictionary links breadth-first, so every node's
    /// fail target is already linked when its children are processed.
    fn link(&mut self) {
        let mut queue = VecDeque::new();
        let first: Vec<u32> = self.nodes[ROOT as usize].children.values().copied().collect();
        for child in first {
            self.nodes[child as usize].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(node) = queue.pop_front() {
            let edges: Vec<(u8, u32)> = self.nodes[node as usize]
                .children
                .iter()
                .map(|(&byte, &child)| (byte, child))
                .collect();
            for (byte, child) in edges {
                let fail = self.next_state(self.nodes[node as usize].fail, byte);
                self.nodes[child as usize].fail = fail;
                self.nodes[child as usize].dict = if self.nodes[fail as usize].key.is_some() {
                    fail
                } else {
                    self.nodes[fail as usize].dict
                };
                queue.push_back(child);
            }
        }
    }

    /// Goto function: follow fail links until `byte` has an edge or the
    /// root is reached.
    fn next_state(&self, mut state: u32, byte: u8) -> u32 {
        loop {
            if let Some(&child) = self.nodes[state as usize].children.get(&byte) {
                return child;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state as usize].fail;
        }
    }
}

/// In-progress scan over one logical text, fed in arbitrary chunks.
///
/// Reports each key at most once; once every key has been seen further
/// input is ignored, which makes feeding large files after full coverage
/// effectively free.
#[derive(Debug)]
pub struct MatchScan<'a> {
    matcher: &'a KeyMatcher,
    state: u32,
    found: Vec<bool>,
    found_count: usize,
}

impl MatchScan<'_> {
    /// Scan one chunk. May be called any number of times; automaton state
    /// persists across calls so matches may span chunk boundaries.
    pub fn feed(&mut self, chunk: &[u8]) {
        if self.is_complete() {
            return;
        }
        for &byte in chunk {
            self.state = self.matcher.next_state(self.state, byte);
            self.collect_outputs();
            if self.is_complete() {
                return;
            }
        }
    }

    /// True once every key in the automaton has been observed.
    pub fn is_complete(&self) -> bool {
        self.found_count == self.matcher.keys.len()
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    /// Finish the scan, returning the indices of all keys observed.
    pub fn into_found(self) -> HashSet<usize> {
        self.found
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| seen)
            .map(|(index, _)| index)
            .collect()
    }

    /// Mark every key ending at the current position: the current node plus
    /// its dictionary-link chain (keys that are proper suffixes of the
    /// current path).
    fn collect_outputs(&mut self) {
        let nodes = &self.matcher.nodes;
        let mut node = self.state;
        loop {
            if let Some(key) = nodes[node as usize].key {
                let key = key as usize;
                if !self.found[key] {
                    self.found[key] = true;
                    self.found_count += 1;
                }
            }
            node = nodes[node as usize].dict;
            if node == ROOT {
                break;
            }
        }
    }
}
