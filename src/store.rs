//! Level-indexed public suffix rule store.
//!
//! Rules are bucketed by label count so the resolver only scans the rules
//! that could produce a registrable domain at a given level.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::parser::{parse_lines, parse_rules_from_file, parse_rules_from_reader};
use crate::types::Rule;

/// Immutable index of suffix rules keyed by label count.
///
/// Within a level, rules keep their corpus order. A rule appearing twice is
/// kept at its first position only.
#[derive(Debug, Clone, Default)]
pub struct SuffixRuleStore {
    levels: HashMap<usize, Vec<String>>,
    rule_count: usize,
}

impl SuffixRuleStore {
    /// Build a store from parsed rules.
    ///
    /// Each rule is filed under the level derived from its own text.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut levels: HashMap<usize, Vec<String>> = HashMap::new();
        let mut seen = HashSet::new();
        let mut rule_count = 0;

        for rule in rules {
            if !seen.insert(rule.value().to_string()) {
                continue;
            }
            let level = rule.label_count();
            levels.entry(level).or_default().push(rule.into_value());
            rule_count += 1;
        }

        let store = Self { levels, rule_count };
        log::info!(
            "Loaded {} suffix rules across {} levels",
            store.rule_count,
            store.level_count()
        );
        store
    }

    /// Build a store from raw corpus lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rules(parse_lines(lines))
    }

    /// Build a store from corpus text
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Build a store from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_rules(parse_rules_from_reader(reader)?))
    }

    /// Build a store from a corpus file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading suffix corpus from {}", path.display());
        Ok(Self::from_rules(parse_rules_from_file(path)?))
    }

    /// Rules with exactly `label_count` labels, in corpus order.
    /// Absent levels yield an empty slice.
    pub fn lookup(&self, label_count: usize) -> &[String] {
        self.levels
            .get(&label_count)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether the exact rule is stored
    pub fn contains(&self, rule: &str) -> bool {
        let level = rule.matches('.').count() + 1;
        self.lookup(level).iter().any(|r| r == rule)
    }

    /// Total number of distinct rules
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Number of non-empty levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Highest label count present, 0 when empty
    pub fn max_level(&self) -> usize {
        self.levels.keys().copied().max().unwrap_or(0)
    }

    /// Present levels in ascending order
    pub fn levels(&self) -> Vec<usize> {
        let mut levels: Vec<usize> = self.levels.keys().copied().collect();
        levels.sort_unstable();
        levels
    }

    /// Check if the store holds no rules
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }
}
