//! Process-wide string table backing [`Symbol`].
//!
//! - Concurrent lookups via DashMap, hashed with ahash
//! - Inserts serialized behind a single write lock so that "insert if absent"
//!   is atomic and symbol indices stay dense
//! - Index to string lookup is O(1) through a side vector
//!
//! # Thread Safety
//!
//! The table is `Sync + Send`. Readers never block each other; a writer only
//! holds exclusive access while it checks for and inserts a missing string.

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol};
use crate::error::{SymbolError, SymbolResult};

/// Global string table instance
///
/// Created empty on first use and lives until process exit.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Thread-safe string table
///
/// Strings are leaked to obtain `'static` references. The table lives for
/// the whole program and never removes entries.
pub struct StringTable {
    /// Maps string contents to symbol index
    map: DashMap<&'static str, u32, RandomState>,

    /// Symbol index to string contents, in insertion order
    ///
    /// The write half of this lock is the insert-if-absent critical section.
    strings: RwLock<Vec<&'static str>>,

    /// Number of cache hits (string already interned)
    hits: AtomicUsize,

    /// Number of cache misses (new string allocation)
    misses: AtomicUsize,
}

impl StringTable {
    /// Create a new empty string table
    pub(crate) fn new() -> Self {
        Self {
            map: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: RwLock::new(Vec::with_capacity(256)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Intern a string, returning its symbol
    ///
    /// If the string is already interned, returns the existing symbol.
    /// Otherwise takes the write lock, re-checks, and inserts.
    pub fn intern(&self, string: &str) -> Symbol {
        // Fast path: shared lookup
        if let Some(index) = self.map.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol { index: *index };
        }

        let mut strings = self.strings.write();

        // Another writer may have won the race while we waited
        if let Some(index) = self.map.get(string) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Symbol { index: *index };
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let interned: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let index = strings.len() as u32;
        strings.push(interned);
        self.map.insert(interned, index);
        Symbol { index }
    }

    /// Look up a string without interning it
    pub fn lookup(&self, string: &str) -> Option<Symbol> {
        self.map.get(string).map(|index| Symbol { index: *index })
    }

    /// Get string by symbol
    pub fn get(&self, symbol: Symbol) -> SymbolResult<&'static str> {
        self.strings
            .read()
            .get(symbol.index as usize)
            .copied()
            .ok_or(SymbolError::NotFound {
                index: symbol.index,
            })
    }

    /// Get statistics about the string table for profiling
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
