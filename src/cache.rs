//! Pattern compilation caching.
//!
//! [`PatternCache`] maps pattern text plus [`CompileConfig`] to a compiled
//! [`Pattern`] so repeated calls with the same literal pattern compile it
//! once. The cache has a fixed capacity; when it is full it is cleared
//! outright before the next insertion.
//!
//! A process-wide instance behind a `Mutex` backs the functions in
//! [`compat`](crate::compat).

use crate::config::{CacheConfig, CompileConfig};
use crate::error::Result;
use crate::pattern::Pattern;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Cache statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Total cache lookups
    pub lookups: usize,

    /// Lookups served from the cache
    pub hits: usize,

    /// Patterns compiled on a miss
    pub compilations: usize,

    /// Patterns dropped by clear-on-overflow
    pub evictions: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache.
    pub fn hit_ratio(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / self.lookups as f64
    }
}

#[derive(Debug)]
pub struct PatternCache {
    patterns: HashMap<(String, CompileConfig), Pattern>,
    config: CacheConfig,
    stats: CacheStats,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            patterns: HashMap::new(),
            config,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached pattern for `text` and `config`, compiling it on a
    /// miss. Compilation errors are returned and nothing is cached.
    pub fn get_or_compile(&mut self, text: &str, config: &CompileConfig) -> Result<Pattern> {
        self.stats.lookups += 1;

        let key = (text.to_string(), *config);
        if let Some(pattern) = self.patterns.get(&key) {
            self.stats.hits += 1;
            trace!("pattern cache hit for {text:?}");
            return Ok(pattern.clone());
        }

        let pattern = Pattern::with_config(text, *config)?;
        self.stats.compilations += 1;

        if self.patterns.len() >= self.config.max_size {
            debug!(
                "pattern cache full ({} entries), clearing",
                self.patterns.len()
            );
            self.stats.evictions += self.patterns.len();
            self.patterns.clear();
        }
        if self.config.max_size > 0 {
            self.patterns.insert(key, pattern.clone());
        }

        Ok(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every cached pattern. Statistics are kept.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CACHE: OnceLock<Mutex<PatternCache>> = OnceLock::new();

fn global() -> &'static Mutex<PatternCache> {
    GLOBAL_CACHE.get_or_init(|| Mutex::new(PatternCache::new()))
}

/// Lock the process-wide cache.
///
/// A panic while the lock was held cannot leave the cache in an unusable
/// state, so a poisoned lock is recovered.
pub fn global_cache() -> MutexGuard<'static, PatternCache> {
    global().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Configure the process-wide cache. Returns `false` if it was already in use.
pub fn init_global_cache(config: CacheConfig) -> bool {
    GLOBAL_CACHE
        .set(Mutex::new(PatternCache::with_config(config)))
        .is_ok()
}
