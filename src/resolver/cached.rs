use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use super::{DomainResolver, Resolver, ResolverOptions};
use crate::store::SuffixRuleStore;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Resolver with LRU caching of results, empty results included.
pub struct CachedResolver {
    resolver: DomainResolver,
    cache: Mutex<LruCache<String, String>>,
}

impl CachedResolver {
    /// Wrap a resolver. A zero cache size is treated as 1.
    pub fn new(resolver: DomainResolver, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            resolver,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Create a cached resolver over `store` from options.
    pub fn with_options(store: Arc<SuffixRuleStore>, options: &ResolverOptions) -> Self {
        Self::new(
            DomainResolver::with_options(store, options),
            options.cache_size,
        )
    }

    /// The wrapped resolver.
    pub fn resolver(&self) -> &DomainResolver {
        &self.resolver
    }

    /// Number of cached entries
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}

impl Resolver for CachedResolver {
    fn resolve(&self, hostname: &str) -> String {
        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(hostname) {
            return cached.clone();
        }

        // Cache miss: resolution is CPU-only, compute it while holding the lock
        let result = self.resolver.resolve(hostname);
        cache.put(hostname.to_string(), result.clone());
        result
    }
}
