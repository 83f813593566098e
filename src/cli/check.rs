//! The `check` command: load the dictionary, scan the corpus, report
//! unreferenced keys.

use std::path::Path;

use anyhow::{Context, Result};

use super::{args::CheckCommand, exit_status::ExitStatus};
use crate::{
    config::{Config, load_config},
    dictionary::Dictionary,
    issue::Issue,
    matcher::KeyMatcher,
    report,
    scanner::{ScanOptions, Traversal, missing_keys, scan},
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = resolve_config(&cwd, &cmd)?;
    let verbose = cmd.common.verbose;

    let dictionary_path = cwd.join(&config.dictionary);
    let dictionary = Dictionary::load(&dictionary_path)?;
    let matcher = KeyMatcher::build(dictionary.keys.clone());

    // Locale files declare every key literally, so the dictionary's own
    // directory must never count as a reference.
    let traversal = Traversal::from_config(&cwd, &config, verbose).ignore_prefix(
        dictionary_path
            .parent()
            .unwrap_or(&dictionary_path)
            .to_path_buf(),
    );

    let options = ScanOptions {
        parallel: !cmd.serial,
        early_exit: !cmd.no_early_exit,
        verbose,
    };
    let outcome = scan(&matcher, &traversal, &options);
    let missing = missing_keys(&matcher, &outcome.present);

    report::print_skipped_warning(outcome.files_skipped, verbose);

    if missing.is_empty() {
        report::print_success(outcome.files_scanned, matcher.key_count());
        return Ok(ExitStatus::Success);
    }

    let issues: Vec<Issue> = missing
        .iter()
        .map(|key| Issue::unreferenced(key, &dictionary.path))
        .collect();
    report::report(&issues);
    Ok(ExitStatus::from_issue_count(issues.len()))
}

/// Load the config file (if any) and apply CLI overrides on top.
fn resolve_config(cwd: &Path, cmd: &CheckCommand) -> Result<Config> {
    let mut config = load_config(cwd)?.config;

    if let Some(dictionary) = &cmd.common.dictionary {
        config.dictionary = dictionary.to_string_lossy().to_string();
    }
    if !cmd.common.source_roots.is_empty() {
        config.source_roots = cmd
            .common
            .source_roots
            .iter()
            .map(|root| root.to_string_lossy().to_string())
            .collect();
    }
    config.ignores.extend(cmd.common.ignores.iter().cloned());

    // Re-validate: CLI-supplied ignore globs bypass the config file check.
    config.validate()?;
    Ok(config)
}
