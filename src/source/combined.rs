//! Lazy concatenation of sequence sources

use super::types::{BoxedSource, SequenceSource};
use tracing::debug;

/// Registered sources read back to back, in registration order
///
/// Holds a pointer into the source list plus whatever read position each
/// source keeps internally. A source is rewound when the sequence enters it,
/// so after [`rebuild`](CombinedSequence::rebuild) enumeration starts again
/// from the first source.
pub struct CombinedSequence<T> {
    sources: Vec<BoxedSource<T>>,
    index: usize,
    entered: bool,
}

impl<T> Default for CombinedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CombinedSequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            index: 0,
            entered: false,
        }
    }

    /// Append a source and rebuild
    pub fn push(&mut self, source: BoxedSource<T>) {
        self.sources.push(source);
        self.rebuild();
    }

    /// Start a fresh enumeration from the first source
    pub fn rebuild(&mut self) {
        self.index = 0;
        self.entered = false;
        debug!("Rebuilt combined sequence over {} sources", self.sources.len());
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if no sources are registered
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Index of the source currently being read
    pub fn source_index(&self) -> usize {
        self.index
    }

    /// Check if an element remains in any source
    pub fn has_next(&mut self) -> bool {
        self.settle()
    }

    /// Pull the next element
    pub fn pull(&mut self) -> Option<T> {
        if self.settle() {
            self.sources[self.index].pull()
        } else {
            None
        }
    }

    /// Move to the first source at or after the current one that still has
    /// an element. Returns false once every source is exhausted.
    fn settle(&mut self) -> bool {
        while let Some(source) = self.sources.get_mut(self.index) {
            if !self.entered {
                source.rewind();
                self.entered = true;
            }
            if source.has_next() {
                return true;
            }
            self.index += 1;
            self.entered = false;
        }
        false
    }
}

impl<T> Iterator for CombinedSequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T> std::fmt::Debug for CombinedSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedSequence")
            .field("sources", &self.sources.len())
            .field("index", &self.index)
            .finish()
    }
}
