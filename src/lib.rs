//! Keysweep - unreferenced localization key checker
//!
//! Keysweep is a CLI tool and library that finds localization keys which are
//! never referenced anywhere in a source tree. It loads a reference
//! dictionary (a flat JSON object of keys), compiles the keys into a
//! multi-pattern automaton, and scans every eligible file in a single pass,
//! reporting keys with no occurrence at all.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `dictionary`: Reference dictionary (key set) loading
//! - `matcher`: Aho-Corasick multi-pattern key matching
//! - `scanner`: Corpus traversal, presence accumulation and early exit
//! - `issue`: Issue type definitions
//! - `report`: Diagnostic formatting and printing

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod issue;
pub mod matcher;
pub mod report;
pub mod scanner;
