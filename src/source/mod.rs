//! Sequence source module
//!
//! Supports: in-memory lists, arbitrary iterators, file lines
//!
//! # Overview
//!
//! A sequence source is any forward-only, single-pass producer of elements.
//! Sources are registered in order and read through a [`CombinedSequence`],
//! which concatenates them lazily: nothing is pulled from a source until the
//! paginator asks for the next element.

mod adapters;
mod combined;
mod types;

pub use adapters::{IterSource, LineSource, VecSource};
pub use combined::CombinedSequence;
pub use types::{BoxedSource, IntoSource, SequenceSource};
