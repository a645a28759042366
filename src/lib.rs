//! # Solidafy Paginator
//!
//! Page-based slicing over one or more forward-only sequences, without
//! materializing the combined sequence upfront.
//!
//! ## Features
//!
//! - **Lazy Reads**: Sources are pulled only as far as the requested page needs
//! - **Multiple Sources**: In-memory lists, iterators and text files, concatenated in order
//! - **Caching Modes**: Full cache for repeated page queries, windowed for one bounded page
//! - **YAML Definitions**: Declarative pagers for the command line
//!
//! ## Quick Start
//!
//! ```rust
//! use solidafy_paginator::{Pagination, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let mut paginator = Paginator::cached();
//!     paginator.add_elements(vec!["alpha", "beta", "delta", "gamma"]);
//!     paginator.add_elements(vec!["epsilon"]);
//!
//!     paginator.set_page_size(2)?;
//!     paginator.set_page_number(2)?;
//!     assert_eq!(paginator.elements_on_page()?, vec!["delta", "gamma"]);
//!
//!     assert_eq!(paginator.number_of_pages()?, 3);
//!     assert_eq!(paginator.number_of_elements()?, 5);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Pagination contract                    │
//! │  add_elements   set_page_size/number   elements_on_page  │
//! │  number_of_pages   number_of_elements                    │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴──────────────────────────────┐
//! │          Paginator: cursor, cache, page boundary         │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴──────────────────────────────┐
//! │        CombinedSequence: sources in registration order   │
//! ├──────────────┬───────────────────┬───────────────────────┤
//! │  VecSource   │    IterSource     │      LineSource       │
//! └──────────────┴───────────────────┴───────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Sequence sources and their lazy concatenation
pub mod source;

/// Paging engine
pub mod pagination;

/// YAML loader for pager definitions
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use loader::{load_definition, load_definition_from_str, PagerDefinition};
pub use pagination::{CacheMode, PageBoundary, Pagination, Paginator};
pub use source::{CombinedSequence, IntoSource, IterSource, LineSource, SequenceSource, VecSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
