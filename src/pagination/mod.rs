//! Pagination module
//!
//! Supports: full-cache and windowed caching modes
//!
//! # Overview
//!
//! The pagination module slices the combined sequence of every registered
//! source into pages of a fixed size. Elements are pulled only as far as the
//! requested page needs, and previously read elements are served from the
//! cache according to the paginator's [`CacheMode`].

mod engine;
mod types;

pub use engine::Paginator;
pub use types::{CacheMode, PageBoundary, Pagination, PaginatorState};
