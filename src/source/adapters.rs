//! Sequence source adapters
//!
//! Each adapter turns a concrete producer into a [`SequenceSource`].

use super::types::{BoxedSource, IntoSource, SequenceSource};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use tracing::warn;

// ============================================================================
// In-memory List
// ============================================================================

/// Ordered in-memory list
///
/// Rewinding starts the enumeration over from the first element, so a list
/// that is re-entered after a rebuild yields all of its elements again.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> VecSource<T> {
    /// Create a new list source
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Self {
            items: items.into(),
            index: 0,
        }
    }

    /// Number of elements not yet read
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.index)
    }
}

impl<T: Clone> SequenceSource for VecSource<T> {
    type Item = T;

    fn current(&mut self) -> Option<&T> {
        self.items.get(self.index)
    }

    fn advance(&mut self) {
        if self.index < self.items.len() {
            self.index += 1;
        }
    }

    fn pull(&mut self) -> Option<T> {
        let item = self.items.get(self.index).cloned();
        self.advance();
        item
    }

    fn rewind(&mut self) {
        self.index = 0;
    }
}

impl<T: Clone + 'static> IntoSource<T> for VecSource<T> {
    fn into_source(self) -> BoxedSource<T> {
        Box::new(self)
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Any iterator, consumed once
///
/// Rewinding is a no-op: elements already pulled are gone.
pub struct IterSource<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Wrap an iterator
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: iter.into_iter().peekable(),
        }
    }
}

impl<I: Iterator> SequenceSource for IterSource<I> {
    type Item = I::Item;

    fn current(&mut self) -> Option<&I::Item> {
        self.inner.peek()
    }

    fn advance(&mut self) {
        self.inner.next();
    }

    fn pull(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<I> IntoSource<I::Item> for IterSource<I>
where
    I: Iterator + 'static,
    I::Item: 'static,
{
    fn into_source(self) -> BoxedSource<I::Item> {
        Box::new(self)
    }
}

// ============================================================================
// File Lines
// ============================================================================

/// Lines of a text file, read lazily
///
/// Each element is one line with its terminator (`\n` or `\r\n`) stripped.
/// Invalid UTF-8 is replaced with `U+FFFD`. Rewinding seeks back to the start
/// of the file. An I/O failure ends the source; the failure is logged.
pub struct LineSource {
    path: PathBuf,
    reader: BufReader<File>,
    line: Option<String>,
    loaded: bool,
    failed: bool,
}

impl LineSource {
    /// Open a file for line-by-line reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        Ok(Self {
            path,
            reader: BufReader::new(file),
            line: None,
            loaded: false,
            failed: false,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.line = None;

        if self.failed {
            return;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {}
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                // Undecodable bytes still make an element
                self.line = Some(String::from_utf8_lossy(&buf).into_owned());
            }
            Err(e) => {
                warn!("Failed to read line from {}: {}", self.path.display(), e);
                self.failed = true;
            }
        }
    }
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("path", &self.path)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

impl SequenceSource for LineSource {
    type Item = String;

    fn current(&mut self) -> Option<&String> {
        self.load();
        self.line.as_ref()
    }

    fn advance(&mut self) {
        self.load();
        self.loaded = false;
        self.line = None;
    }

    fn pull(&mut self) -> Option<String> {
        self.load();
        self.loaded = false;
        self.line.take()
    }

    fn rewind(&mut self) {
        match self.reader.seek(SeekFrom::Start(0)) {
            Ok(_) => {
                self.failed = false;
            }
            Err(e) => {
                warn!("Failed to rewind {}: {}", self.path.display(), e);
                self.failed = true;
            }
        }
        self.loaded = false;
        self.line = None;
    }
}

impl IntoSource<String> for LineSource {
    fn into_source(self) -> BoxedSource<String> {
        Box::new(self)
    }
}
