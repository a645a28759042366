//! Sequence source traits
//!
//! Defines the capability interface every element producer implements.

/// A boxed, type-erased sequence source
pub type BoxedSource<T> = Box<dyn SequenceSource<Item = T>>;

/// Forward-only producer of elements
///
/// Producers only need to expose the element at the read position and move
/// past it. Reset and random access are not part of the contract; a producer
/// that can restart (an in-memory list, a file) overrides [`rewind`].
///
/// [`rewind`]: SequenceSource::rewind
pub trait SequenceSource {
    /// Element type produced
    type Item;

    /// Peek at the element under the read position, if any
    fn current(&mut self) -> Option<&Self::Item>;

    /// Move past the element under the read position
    fn advance(&mut self);

    /// Take the element under the read position and advance
    fn pull(&mut self) -> Option<Self::Item>;

    /// Check if an element remains
    fn has_next(&mut self) -> bool {
        self.current().is_some()
    }

    /// Restart enumeration from the first element.
    ///
    /// Single-pass producers keep their read position.
    fn rewind(&mut self) {}
}

/// Conversion into a boxed sequence source
///
/// Lets `add_elements` accept plain vectors as well as adapters.
pub trait IntoSource<T> {
    /// Box this value as a sequence source
    fn into_source(self) -> BoxedSource<T>;
}

impl<T> IntoSource<T> for BoxedSource<T> {
    fn into_source(self) -> BoxedSource<T> {
        self
    }
}

impl<T: Clone + 'static> IntoSource<T> for Vec<T> {
    fn into_source(self) -> BoxedSource<T> {
        Box::new(super::VecSource::new(self))
    }
}
