//! Reference dictionary loading.
//!
//! The dictionary is a flat JSON object whose top-level keys are the
//! localization identifiers; values are translations and are ignored here.
//! Key order is preserved so repeated runs report keys stably.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// The reference key set, loaded from a localization JSON document.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Path the dictionary was loaded from, as given by the caller.
    pub path: String,
    /// Keys in declaration order. serde_json's map keeps the last value on
    /// duplicate keys, so the list is already unique.
    pub keys: Vec<String>,
}

impl Dictionary {
    /// Load the reference dictionary.
    ///
    /// A missing or malformed document is a configuration error: the check
    /// cannot run without its key set, so this propagates instead of
    /// degrading to an empty dictionary. Locale files exported by
    /// translation platforms often carry a UTF-8 BOM; it is stripped before
    /// parsing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let json: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse dictionary file: {}", path.display()))?;

        let Value::Object(map) = json else {
            bail!(
                "Dictionary file {} must be a JSON object at the top level",
                path.display()
            );
        };

        Ok(Self {
            path: path.to_string_lossy().to_string(),
            keys: map.keys().cloned().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
