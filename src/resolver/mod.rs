//! Registrable domain resolver.
//!
//! Finds the longest public suffix rule matching a hostname and returns the
//! rule plus one label (eTLD+1).

mod cached;

pub use cached::{CachedResolver, DEFAULT_CACHE_SIZE};

use std::sync::Arc;
use std::time::Instant;

use url::Url;

use crate::error::{PslError, Result};
use crate::loader::CorpusLoader;
use crate::store::SuffixRuleStore;
use crate::types::MatchMode;

/// Registrable domain resolver interface.
pub trait Resolver: Send + Sync {
    /// Resolve a hostname to its registrable domain.
    ///
    /// Returns an empty string when no rule applies. Never fails.
    fn resolve(&self, hostname: &str) -> String;

    /// Extract the host from a URL and resolve it.
    ///
    /// Fails only when the URL cannot be parsed or carries no host. Input
    /// without a scheme, such as `play.google.com/store`, is rejected with
    /// `InvalidUrl` rather than resolving to an empty string.
    fn resolve_url(&self, url: &str) -> Result<String> {
        let host = host_from_url(url)?;
        Ok(self.resolve(&host))
    }
}

/// Resolver options.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Suffix test applied to candidate rules
    pub match_mode: MatchMode,
    /// LRU cache size, used by `CachedResolver`
    pub cache_size: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Longest-suffix-first resolver over a shared rule store.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    store: Arc<SuffixRuleStore>,
    match_mode: MatchMode,
}

impl DomainResolver {
    /// Create a resolver with the default (raw suffix) match mode.
    pub fn new(store: Arc<SuffixRuleStore>) -> Self {
        Self::with_options(store, &ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    pub fn with_options(store: Arc<SuffixRuleStore>, options: &ResolverOptions) -> Self {
        Self {
            store,
            match_mode: options.match_mode,
        }
    }

    /// Load the store through `loader` and create a resolver over it.
    pub fn from_loader(loader: &dyn CorpusLoader, options: &ResolverOptions) -> Result<Self> {
        let store = loader.load()?;
        Ok(Self::with_options(store, options))
    }

    /// The underlying rule store.
    pub fn store(&self) -> &Arc<SuffixRuleStore> {
        &self.store
    }

    /// The suffix test applied to candidate rules.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Find the registrable domain without logging.
    fn find_match(&self, hostname: &str) -> Option<String> {
        // The dot count is the number of candidate levels, one less than the
        // hostname's label count, so a match always leaves one label to spare.
        let dot_count = hostname.matches('.').count();
        let top = dot_count.min(self.store.max_level());

        for level in (1..=top).rev() {
            let candidates = self.store.lookup(level);
            if candidates.is_empty() {
                continue;
            }

            if candidates
                .iter()
                .any(|rule| self.match_mode.matches(hostname, rule))
            {
                return Some(last_labels(hostname, level + 1));
            }
        }

        None
    }
}

impl Resolver for DomainResolver {
    fn resolve(&self, hostname: &str) -> String {
        let start = Instant::now();
        let result = self.find_match(hostname).unwrap_or_default();
        log::debug!(
            "Resolved [{}] to [{}] in {:?}",
            hostname,
            result,
            start.elapsed()
        );
        result
    }
}

/// Join the last `count` dot-separated labels of `hostname`.
/// `count` must not exceed the hostname's label count.
fn last_labels(hostname: &str, count: usize) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    labels[labels.len() - count..].join(".")
}

/// Extract the host part of a URL.
pub fn host_from_url(url: &str) -> Result<String> {
    let parsed =
        Url::parse(url).map_err(|e| PslError::InvalidUrl(format!("{}: {}", url, e)))?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(String::from)
        .ok_or_else(|| PslError::InvalidUrl(format!("{}: no host", url)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rule;

    fn resolver(lines: &[&str]) -> DomainResolver {
        DomainResolver::new(Arc::new(SuffixRuleStore::from_lines(lines)))
    }

    #[test]
    fn test_single_level_match() {
        let r = resolver(&["com", "co.uk", "// comment", ""]);
        assert_eq!(r.resolve("www.example.com"), "example.com");
    }

    #[test]
    fn test_longest_match_preferred() {
        let r = resolver(&["uk", "co.uk"]);
        assert_eq!(r.resolve("example.co.uk"), "example.co.uk");
        assert_eq!(r.resolve("www.example.co.uk"), "example.co.uk");
    }

    #[test]
    fn test_longest_match_independent_of_corpus_order() {
        let r = resolver(&["co.uk", "uk"]);
        assert_eq!(r.resolve("example.co.uk"), "example.co.uk");
    }

    #[test]
    fn test_wildcard_rule_collapsed() {
        let r = resolver(&["*.uk"]);
        assert_eq!(r.resolve("a.b.uk"), "b.uk");
    }

    #[test]
    fn test_bare_label_never_resolves() {
        let r = resolver(&["com", "localhost"]);
        assert_eq!(r.resolve("localhost"), "");
        assert_eq!(r.resolve("com"), "");
        assert_eq!(r.resolve(""), "");
    }

    #[test]
    fn test_hostname_equal_to_rule_does_not_resolve() {
        let r = resolver(&["co.uk"]);
        // One dot means only level 1 is tried
        assert_eq!(r.resolve("co.uk"), "");
    }

    #[test]
    fn test_empty_rule_never_reaches_store() {
        let rules = ["", "com"].into_iter().filter_map(Rule::new);
        let r = DomainResolver::new(Arc::new(SuffixRuleStore::from_rules(rules)));
        assert_eq!(r.store().levels(), vec![1]);
        assert_eq!(r.resolve("www.example.zz"), "");
        assert_eq!(r.resolve("www.example.com"), "example.com");
    }

    #[test]
    fn test_no_matching_rule() {
        let r = resolver(&["com"]);
        assert_eq!(r.resolve("example.zz"), "");
    }

    #[test]
    fn test_empty_store() {
        let r = resolver(&[]);
        assert_eq!(r.resolve("www.example.com"), "");
    }

    #[test]
    fn test_raw_suffix_matches_partial_label() {
        // Known gap of the raw suffix test: "om" is not a label of "example.com"
        let r = resolver(&["om"]);
        assert_eq!(r.resolve("example.com"), "example.com");
    }

    #[test]
    fn test_label_aligned_rejects_partial_label() {
        let store = Arc::new(SuffixRuleStore::from_lines(["om", "com"]));
        let options = ResolverOptions::new().with_match_mode(MatchMode::LabelAligned);
        let r = DomainResolver::with_options(store, &options);
        assert_eq!(r.match_mode(), MatchMode::LabelAligned);
        assert_eq!(r.resolve("www.example.com"), "example.com");

        let store = Arc::new(SuffixRuleStore::from_lines(["om"]));
        let r = DomainResolver::with_options(store, &options);
        assert_eq!(r.resolve("example.com"), "");
    }

    #[test]
    fn test_first_rule_in_level_wins() {
        // Both rules textually match; corpus order decides, and both give
        // the same two-label result for this hostname.
        let r = resolver(&["m", "com"]);
        assert_eq!(r.resolve("a.b.com"), "b.com");
    }

    #[test]
    fn test_exception_rules_have_no_effect() {
        // "!www.ck" would carve www.ck out of *.ck; exceptions are dropped,
        // so the wildcard collapses to "ck" and www.ck resolves like any other.
        let r = resolver(&["*.ck", "!www.ck"]);
        assert_eq!(r.resolve("www.ck"), "www.ck");
        assert_eq!(r.resolve("a.www.ck"), "www.ck");
    }

    #[test]
    fn test_levels_above_store_max_are_skipped() {
        let r = resolver(&["com"]);
        assert_eq!(r.resolve("a.b.c.d.e.f.example.com"), "example.com");
    }

    #[test]
    fn test_deterministic_across_builds() {
        let lines = ["com", "co.uk", "*.jp", "kawasaki.jp"];
        let a = resolver(&lines);
        let b = resolver(&lines);
        for host in ["www.example.com", "x.y.kawasaki.jp", "a.co.uk", "zz"] {
            assert_eq!(a.resolve(host), b.resolve(host));
        }
    }

    #[test]
    fn test_last_labels() {
        assert_eq!(last_labels("a.b.c", 2), "b.c");
        assert_eq!(last_labels("a.b.c", 3), "a.b.c");
    }

    #[test]
    fn test_host_from_url() {
        assert_eq!(
            host_from_url("https://www.example.co.uk/path?q=1").unwrap(),
            "www.example.co.uk"
        );
        assert_eq!(host_from_url("http://Example.COM:8080").unwrap(), "example.com");
    }

    #[test]
    fn test_host_from_url_errors() {
        assert!(matches!(
            host_from_url("not a url"),
            Err(PslError::InvalidUrl(_))
        ));
        assert!(matches!(
            host_from_url("play.google.com/store"),
            Err(PslError::InvalidUrl(_))
        ));
        assert!(matches!(
            host_from_url("mailto:someone@example.com"),
            Err(PslError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolve_url() {
        let r = resolver(&["com", "co.uk"]);
        assert_eq!(
            r.resolve_url("https://play.google.com/store/apps").unwrap(),
            "google.com"
        );
        assert_eq!(r.resolve_url("https://www.bbc.co.uk/").unwrap(), "bbc.co.uk");
        assert_eq!(r.resolve_url("http://localhost:3000/").unwrap(), "");
    }

    #[test]
    fn test_from_loader() {
        let loader = crate::loader::MemoryCorpusLoader::from_text("com\n");
        let r = DomainResolver::from_loader(&loader, &ResolverOptions::default()).unwrap();
        assert_eq!(r.store().rule_count(), 1);
        assert_eq!(r.resolve("a.example.com"), "example.com");
    }
}
