// src/rules/mod.rs

//! Path-prefix rule matching.
//!
//! A rule pairs a path prefix with an ordered list of command templates.
//! Matching is a pure lookup: every rule whose prefix is a string-prefix of
//! the saved file's path is returned, in configuration order.

use indexmap::IndexMap;
use serde::Deserialize;

/// Ordered mapping from path prefix to command templates.
///
/// Iteration order is configuration order, for the prefixes and for each
/// prefix's command list — later commands may depend on earlier ones having
/// already run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, Vec<String>>,
}

/// A rule whose prefix matched the saved file's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRule<'a> {
    pub prefix: &'a str,
    pub commands: &'a [String],
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Re-inserting an existing prefix replaces its command
    /// list but keeps the prefix's original position.
    pub fn insert(&mut self, prefix: impl Into<String>, commands: Vec<String>) {
        self.rules.insert(prefix.into(), commands);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterate all rules in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(prefix, commands)| (prefix.as_str(), commands.as_slice()))
    }

    /// Every rule whose prefix is a string-prefix of `file_path`, in
    /// configuration order.
    ///
    /// Prefixes are compared as raw strings, not path segments: the prefix
    /// `/a/b` matches `/a/bc/file.txt`. Zero matches is a normal result.
    pub fn matches<'a>(&'a self, file_path: &str) -> Vec<MatchedRule<'a>> {
        self.rules
            .iter()
            .filter(|(prefix, _)| file_path.starts_with(prefix.as_str()))
            .map(|(prefix, commands)| MatchedRule {
                prefix,
                commands: commands.as_slice(),
            })
            .collect()
    }
}
