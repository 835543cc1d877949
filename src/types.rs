use std::fmt;

/// A public suffix rule, e.g. `"co.uk"` or `"com"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Cleaned label sequence (no comment, no `*.` prefix)
    value: String,
    /// Number of dot-separated labels in `value`, always at least 1
    label_count: usize,
}

impl Rule {
    /// Create a rule from an already cleaned label sequence.
    ///
    /// Returns `None` for an empty value, which would match every hostname.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            return None;
        }
        let label_count = value.matches('.').count() + 1;
        Some(Self { value, label_count })
    }

    /// The rule's label sequence
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of dot-separated labels
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// How a hostname is tested against a candidate rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Plain string suffix: "example.com" ends with "om".
    /// A rule may match part of a label.
    #[default]
    RawSuffix,
    /// Label-aligned suffix: the hostname equals the rule or ends with ".rule"
    LabelAligned,
}

impl MatchMode {
    /// Check if `hostname` ends with `rule` under this mode
    pub fn matches(&self, hostname: &str, rule: &str) -> bool {
        match self {
            MatchMode::RawSuffix => hostname.ends_with(rule),
            MatchMode::LabelAligned => {
                // Avoid the format! allocation of ".rule"
                match hostname.strip_suffix(rule) {
                    Some("") => true,
                    Some(head) => head.ends_with('.'),
                    None => false,
                }
            }
        }
    }
}
