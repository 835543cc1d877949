//! eTLD+1 resolver - registrable domain lookup against a public suffix list
//!
//! This library provides:
//! - Parsing of line-oriented public suffix corpora (comments, wildcards)
//! - A level-indexed, immutable rule store shared across threads
//! - Longest-suffix-first resolution of hostnames and URLs
//! - LRU caching of resolution results
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use etld_resolver::{DomainResolver, Resolver, SuffixRuleStore};
//!
//! let corpus = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! uk
//! co.uk
//! *.ck
//! ";
//!
//! let store = Arc::new(SuffixRuleStore::from_text(corpus));
//! let resolver = DomainResolver::new(store);
//!
//! assert_eq!(resolver.resolve("www.example.com"), "example.com");
//! assert_eq!(resolver.resolve("www.example.co.uk"), "example.co.uk");
//! assert_eq!(resolver.resolve("localhost"), "");
//! ```
//!
//! # Corpus Syntax
//!
//! | Line | Effect |
//! |------|--------|
//! | `com` | Rule with 1 label |
//! | `co.uk` | Rule with 2 labels |
//! | `*.ck` | Stored as `ck` |
//! | `!www.ck` | Ignored (exception rules are not supported) |
//! | `// ...` | Comment |
//! | empty | Ignored |

pub mod error;
pub mod loader;
pub mod parser;
pub mod resolver;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use error::{CorpusErrorKind, PslError, Result};
pub use loader::{CorpusLoader, FileCorpusLoader, MemoryCorpusLoader, DEFAULT_CORPUS_PATH};
pub use parser::{parse_rule_line, parse_rules, parse_rules_from_file};
pub use resolver::{
    host_from_url, CachedResolver, DomainResolver, Resolver, ResolverOptions, DEFAULT_CACHE_SIZE,
};
pub use store::SuffixRuleStore;
pub use types::{MatchMode, Rule};
