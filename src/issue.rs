use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostic categories. Automated callers match on the displayed name,
/// so it is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnreferencedKey,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::UnreferencedKey => write!(f, "unreferenced-key"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// The localization key the diagnostic is about.
    pub key: String,
    /// The reference dictionary the key was declared in.
    pub dictionary: String,
    pub severity: Severity,
    pub rule: Rule,
}

impl Issue {
    pub fn unreferenced(key: &str, dictionary: &str) -> Self {
        Self {
            key: key.to_string(),
            dictionary: dictionary.to_string(),
            severity: Severity::Error,
            rule: Rule::UnreferencedKey,
        }
    }
}
