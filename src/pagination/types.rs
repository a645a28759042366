//! Pagination types and traits
//!
//! Defines the public paging contract and the values it is configured with.

use crate::error::Result;
use crate::source::IntoSource;
use serde::{Deserialize, Serialize};

/// Which elements a paginator keeps after reading them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Keep every element read. Page size and number may change at any time.
    #[default]
    Full,
    /// Keep only elements on the configured page. Page size and number are
    /// set once, before the first read.
    Windowed,
}

impl CacheMode {
    /// Check if this is windowed mode
    pub fn is_windowed(&self) -> bool {
        matches!(self, Self::Windowed)
    }
}

/// 1-based inclusive position range of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBoundary {
    /// First position on the page
    pub start: usize,
    /// Last position on the page
    pub end: usize,
}

impl PageBoundary {
    /// Compute the boundary of page `number` for pages of `size` elements
    pub fn new(size: usize, number: usize) -> Self {
        let end = size.saturating_mul(number);
        let start = size
            .saturating_mul(number.saturating_sub(1))
            .saturating_add(1);
        Self { start, end }
    }

    /// Check if a position lies on the page
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }

    /// Check if a position lies beyond the end of the page
    pub fn is_passed_by(&self, position: usize) -> bool {
        position > self.end
    }
}

/// Configuration state of a paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// Neither page size nor page number set
    Unconfigured,
    /// Only page size set
    SizeOnly,
    /// Only page number set
    NumberOnly,
    /// Both set, page boundary computed
    BothSet,
    /// At least one element has been read
    Reading,
}

/// Page-based view over lazily concatenated sources
pub trait Pagination<T> {
    /// Register a source after all sources added so far
    fn add_elements(&mut self, source: impl IntoSource<T>);

    /// Set the 1-based page number
    fn set_page_number(&mut self, page: i64) -> Result<()>;

    /// Get the page number, `None` if never set
    fn page_number(&self) -> Option<usize>;

    /// Set the number of elements per page
    fn set_page_size(&mut self, per_page: i64) -> Result<()>;

    /// Get the page size, `None` if never set
    fn page_size(&self) -> Option<usize>;

    /// Elements on the configured page, in order
    fn elements_on_page(&mut self) -> Result<Vec<T>>;

    /// Total number of pages. Reads every source to the end.
    fn number_of_pages(&mut self) -> Result<usize>;

    /// Total number of elements. Reads every source to the end.
    fn number_of_elements(&mut self) -> Result<usize>;
}
