//! Symbol module - String interning for identifier names.
//!
//! This module provides the [`Symbol`] type, a compact (4-byte) handle to a
//! string stored in the process-wide [`STRING_TABLE`]. The lexer interns every
//! normalized identifier, so two spellings that normalize to the same name
//! end up as the same `Symbol` and compare in O(1).
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | Shared lookup, no lock held |
//! | `Symbol::intern()` (miss) | O(1) | Exclusive insert-if-absent |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(1) | Index into side vector |
//!
//! # Memory Model
//!
//! Interned strings are leaked and live for the rest of the process. The
//! table starts empty and is never persisted.
//!
//! # Examples
//!
//! ```
//! use sablec_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! assert_eq!(s1.as_str(), "hello");
//! ```

mod interner;

pub use interner::{StringTable, STRING_TABLE};

use crate::error::SymbolResult;

/// Statistics about the string interner for profiling
///
/// # Examples
///
/// ```
/// use sablec_util::symbol::Symbol;
///
/// let _ = Symbol::intern("stats_example");
/// let stats = Symbol::stats();
/// assert!(stats.count >= 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity
    pub capacity: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats { count: 10, capacity: 16, hits: 90, misses: 10 };
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Symbol - An interned string identifier
///
/// # Examples
///
/// ```
/// use sablec_util::symbol::Symbol;
///
/// let name = Symbol::intern("μ");
/// assert_eq!(name.as_str(), "μ");
/// assert_eq!(name, Symbol::intern("μ"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

impl Symbol {
    /// Intern a string, returning its symbol
    ///
    /// The string is stored verbatim; callers that need name equivalence
    /// (such as the lexer) normalize before interning.
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Return the symbol for `string` if it has already been interned
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("already_here");
    /// assert_eq!(Symbol::lookup("already_here"), Some(sym));
    /// ```
    #[inline]
    pub fn lookup(string: &str) -> Option<Self> {
        STRING_TABLE.lookup(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// Returns an empty string for a symbol that the table never handed out;
    /// use [`Symbol::try_as_str`] to observe that case.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.try_as_str().unwrap_or("")
    }

    /// Get the string value, failing for a symbol unknown to the table
    #[inline]
    pub fn try_as_str(&self) -> SymbolResult<&'static str> {
        STRING_TABLE.get(*self)
    }

    /// Check if the symbol's string is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::intern("蟒").len(), 3);  // UTF-8 bytes
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Get the raw table index
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Snapshot of the global table's statistics
    pub fn stats() -> InternerStats {
        STRING_TABLE.stats()
    }
}

impl std::fmt::Debug for Symbol {
    /// Format the symbol for debugging, showing the actual string content
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{:?}", sym), "Symbol(hello)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(string: &str) -> Self {
        Symbol::intern(string)
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync, Copy);
static_assertions::assert_eq_size!(Symbol, u32);
