use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{CorpusErrorKind, PslError, Result};
use crate::store::SuffixRuleStore;

/// Default corpus location, relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "data/public_suffix_list.dat";

/// Trait for loading the suffix rule store
pub trait CorpusLoader: Send + Sync {
    /// Load a fully built store, or fail without producing one
    fn load(&self) -> Result<Arc<SuffixRuleStore>>;
}

/// File-based loader. Parses the corpus once and hands out the same store
/// on every later call.
pub struct FileCorpusLoader {
    path: PathBuf,
    store: OnceCell<Arc<SuffixRuleStore>>,
}

impl FileCorpusLoader {
    /// Create a loader for `DEFAULT_CORPUS_PATH`
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS_PATH),
            store: OnceCell::new(),
        }
    }

    /// Set the corpus file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Configured corpus path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the corpus has already been loaded
    pub fn is_loaded(&self) -> bool {
        self.store.get().is_some()
    }
}

impl Default for FileCorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoader for FileCorpusLoader {
    fn load(&self) -> Result<Arc<SuffixRuleStore>> {
        if self.path.as_os_str().is_empty() {
            return Err(PslError::corpus(
                CorpusErrorKind::NotConfigured,
                "Corpus path not configured",
            ));
        }

        // Errors are not cached, the next call retries the read
        self.store
            .get_or_try_init(|| SuffixRuleStore::from_file(&self.path).map(Arc::new))
            .cloned()
    }
}

/// In-memory loader, mostly for tests and embedded corpora
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpusLoader {
    lines: Vec<String>,
}

impl MemoryCorpusLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from corpus text
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    /// Append a raw corpus line
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl CorpusLoader for MemoryCorpusLoader {
    fn load(&self) -> Result<Arc<SuffixRuleStore>> {
        Ok(Arc::new(SuffixRuleStore::from_lines(&self.lines)))
    }
}
