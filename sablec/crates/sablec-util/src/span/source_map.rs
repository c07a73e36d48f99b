//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::{FileId, SourcePos, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// The name is what diagnostics print, e.g. `invalid character in identifier
/// (badsyntax.sb, line 2)`.
///
/// # Examples
///
/// ```
/// use sablec_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.sb", "ä = 1");
/// assert_eq!(file.name(), "main.sb");
/// assert_eq!(file.content(), "ä = 1");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: Arc<str>,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the file name
    #[inline]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.sb", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to a [`SourcePos`]
    ///
    /// Columns count characters, so a line starting with `蟒` puts the
    /// following character at column 2. Offsets past the end clamp to the
    /// end of the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.sb", "x = 1\n蟒 = 3");
    /// let pos = file.pos_at(file.content().find('=').unwrap());
    /// assert_eq!((pos.line, pos.column), (1, 3));
    /// let pos = file.pos_at(10);
    /// assert_eq!((pos.line, pos.column), (2, 3));
    /// ```
    pub fn pos_at(&self, offset: usize) -> SourcePos {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        SourcePos::new(offset, line as u32 + 1, column as u32 + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.sb", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Check that `line` exists in this file
    pub fn check_line(&self, line: usize) -> SourceMapResult<()> {
        if line == 0 || line > self.line_count() {
            return Err(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            });
        }
        Ok(())
    }

    /// Extract the source text covered by a span
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::{SourceFile, SourcePos, Span};
    ///
    /// let file = SourceFile::new(0, "main.sb", "µ = 2");
    /// let span = Span::new(SourcePos::new(0, 1, 1), SourcePos::new(2, 1, 2));
    /// assert_eq!(file.snippet(span).unwrap(), "µ");
    /// ```
    pub fn snippet(&self, span: Span) -> SourceMapResult<&str> {
        let (start, end) = (span.start(), span.end());
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use sablec_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.sb", "x = 1");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.sb");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file, returning its [`FileId`]
    pub fn add_file(&mut self, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Get a source file by its ID with error handling
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Render a span with its source line and a caret underline
    ///
    /// Carets are placed by character column so non-ASCII lines line up.
    ///
    /// # Examples
    ///
    /// ```
    /// use sablec_util::span::{SourceMap, SourcePos, Span};
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("main.sb", "ä = 1\n€ = 2");
    /// let file = map.get(id).unwrap();
    /// let lo = file.pos_at(7);
    /// let hi = file.pos_at(10);
    /// let rendered = map.format_span(Span::new(lo, hi).with_file_id(id)).unwrap();
    /// assert!(rendered.starts_with("--> main.sb:2:1\n"));
    /// assert!(rendered.ends_with("| ^"));
    /// ```
    pub fn format_span(&self, span: Span) -> SourceMapResult<String> {
        let file = self.get_file(span.file_id)?;
        let line_no = span.line() as usize;
        file.check_line(line_no)?;
        let line = file.line_at(line_no).unwrap_or_default();
        let gutter = file.line_count().to_string().len().max(3);

        let underline_len = file
            .snippet(span)
            .map(|text| text.chars().count())
            .unwrap_or(0)
            .max(1);
        let indent = (span.column() as usize).saturating_sub(1);

        Ok(format!(
            "--> {}:{}:{}\n{:>gutter$} | {}\n{:>gutter$} | {}{}",
            file.name(),
            span.line(),
            span.column(),
            line_no,
            line,
            "",
            " ".repeat(indent),
            "^".repeat(underline_len),
        ))
    }
}
