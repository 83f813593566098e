//! Corpus traversal and presence accumulation.
//!
//! Walks the configured source roots, feeds each file through the
//! [`KeyMatcher`](crate::matcher::KeyMatcher), and records which keys were
//! observed. Excluded subtrees are pruned before descent, so nothing inside
//! them is ever opened. Once every key has been seen the walk stops early;
//! that is a pure performance optimization and never changes the result.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::{config::Config, matcher::KeyMatcher};

/// Where to scan and what to skip.
#[derive(Debug, Default)]
pub struct Traversal {
    roots: Vec<PathBuf>,
    /// Literal path prefixes; a directory matching one is pruned with its
    /// whole subtree.
    ignore_prefixes: Vec<PathBuf>,
    /// Glob patterns matched against full paths, directories and files alike.
    ignore_globs: Vec<Pattern>,
}

impl Traversal {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            ignore_prefixes: Vec::new(),
            ignore_globs: Vec::new(),
        }
    }

    /// Build a traversal from the loaded configuration, resolving relative
    /// entries against `base_dir`. Invalid glob patterns are skipped with a
    /// warning in verbose mode; `validate()` already rejects them when they
    /// come from a config file.
    pub fn from_config(base_dir: &Path, config: &Config, verbose: bool) -> Self {
        let mut traversal = Self::new(
            config
                .source_roots
                .iter()
                .map(|root| base_dir.join(root)),
        );

        for entry in &config.ignores {
            if crate::config::is_glob_pattern(entry) {
                match Pattern::new(entry) {
                    Ok(pattern) => traversal.ignore_globs.push(pattern),
                    Err(err) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                entry,
                                err
                            );
                        }
                    }
                }
            } else {
                traversal.ignore_prefixes.push(base_dir.join(entry));
            }
        }

        traversal
    }

    /// Add a literal path prefix to exclude.
    pub fn ignore_prefix<P: Into<PathBuf>>(mut self, prefix: P) -> Self {
        self.ignore_prefixes.push(prefix.into());
        self
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self
            .ignore_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.ignore_globs.iter().any(|glob| glob.matches(&path_str))
    }
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Process files on the rayon thread pool instead of in order.
    pub parallel: bool,
    /// Stop the walk once every key has been observed.
    pub early_exit: bool,
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            early_exit: true,
            verbose: false,
        }
    }
}

/// Outcome of one scan run.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Indices into the matcher's key list that were observed at least once.
    pub present: HashSet<usize>,
    pub files_scanned: usize,
    /// Files that could not be read (permissions, broken symlinks, ...).
    pub files_skipped: usize,
    /// True if the walk stopped before visiting every file because all keys
    /// were already accounted for.
    pub stopped_early: bool,
}

/// Scan the corpus and return the set of observed keys.
///
/// Per-file read failures are skipped and counted, never fatal: this check
/// is best-effort verification, and a key whose only occurrence sits in an
/// unreadable file is reported missing by contract. File contents are
/// decoded lossily, so malformed encodings degrade to garbled text that is
/// still scanned.
pub fn scan(matcher: &KeyMatcher, traversal: &Traversal, options: &ScanOptions) -> ScanOutcome {
    if options.parallel {
        scan_parallel(matcher, traversal, options)
    } else {
        scan_serial(matcher, traversal, options)
    }
}

/// Compute the final result: keys never observed, sorted for reproducible
/// output.
pub fn missing_keys(matcher: &KeyMatcher, present: &HashSet<usize>) -> Vec<String> {
    let mut missing: Vec<String> = matcher
        .keys()
        .iter()
        .enumerate()
        .filter(|(index, _)| !present.contains(index))
        .map(|(_, key)| key.clone())
        .collect();
    missing.sort();
    missing
}

fn scan_serial(matcher: &KeyMatcher, traversal: &Traversal, options: &ScanOptions) -> ScanOutcome {
    let mut outcome = ScanOutcome {
        present: HashSet::new(),
        files_scanned: 0,
        files_skipped: 0,
        stopped_early: false,
    };

    'roots: for root in &traversal.roots {
        // Follow symlinks so a linked file is opened like any other entry;
        // broken links surface as walk errors and hit the skip path below.
        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !traversal.is_ignored(entry.path()));

        for entry in walker {
            if options.early_exit && outcome.present.len() == matcher.key_count() {
                outcome.stopped_early = true;
                break 'roots;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    outcome.files_skipped += 1;
                    warn_unreadable(options.verbose, &err.to_string());
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            match read_and_match(matcher, entry.path()) {
                Ok(found) => {
                    outcome.files_scanned += 1;
                    outcome.present.extend(found);
                }
                Err(err) => {
                    outcome.files_skipped += 1;
                    warn_unreadable(options.verbose, &format!("{:#}", err));
                }
            }
        }
    }

    outcome
}

/// Parallel variant: subtrees are pruned during file collection, then the
/// file loop runs on the rayon pool. The presence set is merged under a
/// mutex, so a key seen by any worker before the early-exit flag flips is
/// always counted; workers that race past the flag only cost extra reads,
/// never correctness.
fn scan_parallel(
    matcher: &KeyMatcher,
    traversal: &Traversal,
    options: &ScanOptions,
) -> ScanOutcome {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut files_skipped = 0;

    for root in &traversal.roots {
        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !traversal.is_ignored(entry.path()));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    files.push(entry.path().to_path_buf());
                }
                Ok(_) => {}
                Err(err) => {
                    files_skipped += 1;
                    warn_unreadable(options.verbose, &err.to_string());
                }
            }
        }
    }

    let present = Mutex::new(HashSet::new());
    let complete = AtomicBool::new(matcher.is_empty());
    let files_scanned = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(files_skipped);
    let visited = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        if options.early_exit && complete.load(Ordering::SeqCst) {
            return;
        }
        visited.fetch_add(1, Ordering::SeqCst);

        match read_and_match(matcher, path) {
            Ok(found) => {
                files_scanned.fetch_add(1, Ordering::SeqCst);
                let mut present = present.lock().expect("presence set lock poisoned");
                present.extend(found);
                if present.len() == matcher.key_count() {
                    complete.store(true, Ordering::SeqCst);
                }
            }
            Err(err) => {
                skipped.fetch_add(1, Ordering::SeqCst);
                warn_unreadable(options.verbose, &format!("{:#}", err));
            }
        }
    });

    let stopped_early =
        options.early_exit && complete.into_inner() && visited.into_inner() < files.len();
    ScanOutcome {
        present: present.into_inner().expect("presence set lock poisoned"),
        files_scanned: files_scanned.into_inner(),
        files_skipped: skipped.into_inner(),
        stopped_early,
    }
}

/// Read one file and report which keys occur in it. Content is decoded
/// lossily so invalid byte sequences never abort the run.
fn read_and_match(matcher: &KeyMatcher, path: &Path) -> Result<HashSet<usize>> {
    let bytes =
        fs::read(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let mut scan = matcher.scanner();
    scan.feed(text.as_bytes());
    Ok(scan.into_found())
}

fn warn_unreadable(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}
