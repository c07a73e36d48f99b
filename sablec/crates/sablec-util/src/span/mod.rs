//! Span module - Source location tracking.
//!
//! A [`SourcePos`] is a single point in a file: byte offset plus 1-based
//! line and column (columns count characters, not bytes). A [`Span`] is a
//! half-open range between two positions in one file.
//!
//! # Examples
//!
//! ```
//! use sablec_util::span::{FileId, SourcePos, Span};
//!
//! let start = SourcePos::new(0, 1, 1);
//! let end = SourcePos::new(2, 1, 2);
//! let span = Span::new(start, end).with_file_id(FileId(3));
//! assert_eq!(span.len(), 2);
//! assert_eq!(span.line(), 1);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// A point in source text
///
/// Captured once by the lexer and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePos {
    /// Byte offset from the start of the file
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl SourcePos {
    /// Start of a file
    pub const START: SourcePos = SourcePos {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Create a new position
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// `lo` is inclusive and `hi` exclusive, both in the same file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First position covered by the span
    pub lo: SourcePos,
    /// Position just past the end of the span
    pub hi: SourcePos,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        lo: SourcePos::START,
        hi: SourcePos::START,
        file_id: FileId::DUMMY,
    };

    /// Create a new span in the default file
    #[inline]
    pub fn new(lo: SourcePos, hi: SourcePos) -> Self {
        Self {
            lo,
            hi,
            file_id: FileId::DUMMY,
        }
    }

    /// Create an empty span at a single position
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::{SourcePos, Span};
    ///
    /// let point = Span::point(SourcePos::new(4, 2, 1));
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(pos: SourcePos) -> Self {
        Self::new(pos, pos)
    }

    /// Byte offset of the first covered byte
    #[inline]
    pub fn start(&self) -> usize {
        self.lo.offset
    }

    /// Byte offset just past the span
    #[inline]
    pub fn end(&self) -> usize {
        self.hi.offset
    }

    /// Line on which the span starts
    #[inline]
    pub fn line(&self) -> u32 {
        self.lo.line
    }

    /// Column at which the span starts
    #[inline]
    pub fn column(&self) -> u32 {
        self.lo.column
    }

    /// Returns true if this span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo.offset == self.hi.offset
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.hi.offset.saturating_sub(self.lo.offset)
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::{SourcePos, Span};
    ///
    /// let span = Span::new(SourcePos::new(10, 1, 11), SourcePos::new(20, 1, 21));
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.lo.offset <= offset && offset < self.hi.offset
    }

    /// Smallest span covering both spans
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
            file_id: self.file_id,
        }
    }

    /// Set the file ID for this span
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}
