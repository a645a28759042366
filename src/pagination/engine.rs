//! Paginator engine
//!
//! Pulls from the combined sequence one element at a time, caching as it
//! goes, and answers page queries from the cache.

use super::types::{CacheMode, PageBoundary, Pagination, PaginatorState};
use crate::error::{Error, Result};
use crate::source::{CombinedSequence, IntoSource};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

const PAGE_NUMBER: &str = "page number";
const PAGE_SIZE: &str = "page size";

/// Lazy paginator over one or more sequence sources
///
/// The read cursor counts elements pulled from the combined sequence and is
/// never reset. Appending a source restarts the combined sequence from the
/// first source while the cursor and cache stay as they are, so positions
/// read after a mid-traversal append continue from the old cursor value.
///
/// # Example
///
/// ```
/// use solidafy_paginator::pagination::{Pagination, Paginator};
///
/// let mut paginator = Paginator::cached();
/// paginator.add_elements(vec!["a", "b", "c", "d", "e"]);
/// paginator.set_page_size(2)?;
/// paginator.set_page_number(3)?;
///
/// assert_eq!(paginator.elements_on_page()?, vec!["e"]);
/// assert_eq!(paginator.number_of_pages()?, 3);
/// # Ok::<(), solidafy_paginator::Error>(())
/// ```
#[derive(Debug)]
pub struct Paginator<T> {
    sources: CombinedSequence<T>,
    cache: BTreeMap<usize, T>,
    cache_mode: CacheMode,
    page_size: Option<usize>,
    page_number: Option<usize>,
    boundary: Option<PageBoundary>,
    position: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(CacheMode::default())
    }
}

impl<T> Paginator<T> {
    /// Create a new paginator with the given caching mode
    pub fn new(cache_mode: CacheMode) -> Self {
        Self {
            sources: CombinedSequence::new(),
            cache: BTreeMap::new(),
            cache_mode,
            page_size: None,
            page_number: None,
            boundary: None,
            position: 0,
        }
    }

    /// Create a paginator that caches every element it reads
    pub fn cached() -> Self {
        Self::new(CacheMode::Full)
    }

    /// Create a paginator that caches only the configured page
    pub fn windowed() -> Self {
        Self::new(CacheMode::Windowed)
    }

    /// Caching mode chosen at construction
    pub fn cache_mode(&self) -> CacheMode {
        self.cache_mode
    }

    /// Current page boundary, once both size and number are set
    pub fn boundary(&self) -> Option<PageBoundary> {
        self.boundary
    }

    /// Number of elements pulled so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of cached elements
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of registered sources
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Configuration state
    pub fn state(&self) -> PaginatorState {
        if self.position > 0 {
            return PaginatorState::Reading;
        }
        match (self.page_size, self.page_number) {
            (None, None) => PaginatorState::Unconfigured,
            (Some(_), None) => PaginatorState::SizeOnly,
            (None, Some(_)) => PaginatorState::NumberOnly,
            (Some(_), Some(_)) => PaginatorState::BothSet,
        }
    }

    /// Validate a page setting and check it may still change.
    fn checked_setting(&self, field: &str, current: Option<usize>, value: i64) -> Result<usize> {
        if value < 1 {
            return Err(Error::invalid_argument(field, value));
        }
        if current.is_some() && self.cache_mode.is_windowed() {
            return Err(Error::immutable(field));
        }
        usize::try_from(value).map_err(|_| Error::invalid_argument(field, value))
    }

    fn update_boundary(&mut self) {
        if let (Some(size), Some(number)) = (self.page_size, self.page_number) {
            let boundary = PageBoundary::new(size, number);
            debug!(
                "Page {} of size {} covers positions {}..={}",
                number, size, boundary.start, boundary.end
            );
            self.boundary = Some(boundary);
        }
    }

    fn require_page_for_read(&self) -> Result<()> {
        if self.cache_mode.is_windowed() && self.boundary.is_none() {
            return Err(Error::configuration_required(
                "read elements",
                "page size and page number must be set before reading a windowed paginator",
            ));
        }
        Ok(())
    }

    fn read_next_element(&mut self) -> Result<()> {
        self.require_page_for_read()?;

        let Some(element) = self.sources.pull() else {
            return Ok(());
        };
        self.position += 1;
        trace!("Read element at position {}", self.position);

        let keep = match self.cache_mode {
            CacheMode::Full => true,
            CacheMode::Windowed => self
                .boundary
                .is_some_and(|boundary| boundary.contains(self.position)),
        };
        if keep {
            self.cache.insert(self.position, element);
        }
        Ok(())
    }

    fn read_to_end_of_page(&mut self, boundary: PageBoundary) -> Result<()> {
        // Boundary first: peeking may pull from a source
        while !boundary.is_passed_by(self.position) && self.sources.has_next() {
            self.read_next_element()?;
        }
        debug!(
            "Read up to position {} for page ending at {}",
            self.position, boundary.end
        );
        Ok(())
    }

    fn read_all_elements(&mut self) -> Result<()> {
        while self.sources.has_next() {
            self.read_next_element()?;
        }
        debug!("Read all sources: {} elements", self.position);
        Ok(())
    }
}

impl<T: Clone> Pagination<T> for Paginator<T> {
    fn add_elements(&mut self, source: impl IntoSource<T>) {
        if self.position > 0 {
            warn!(
                "Source added after {} elements were read; the combined sequence restarts from the first source while positions continue from the cursor",
                self.position
            );
        }
        self.sources.push(source.into_source());
    }

    fn set_page_number(&mut self, page: i64) -> Result<()> {
        let page = self.checked_setting(PAGE_NUMBER, self.page_number, page)?;
        self.page_number = Some(page);
        self.update_boundary();
        Ok(())
    }

    fn page_number(&self) -> Option<usize> {
        self.page_number
    }

    fn set_page_size(&mut self, per_page: i64) -> Result<()> {
        let per_page = self.checked_setting(PAGE_SIZE, self.page_size, per_page)?;
        self.page_size = Some(per_page);
        self.update_boundary();
        Ok(())
    }

    fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    fn elements_on_page(&mut self) -> Result<Vec<T>> {
        let Some(boundary) = self.boundary else {
            if self.sources.has_next() {
                self.require_page_for_read()?;
            }
            return Ok(Vec::new());
        };

        self.read_to_end_of_page(boundary)?;

        Ok(self
            .cache
            .range(boundary.start..=boundary.end)
            .map(|(_, element)| element.clone())
            .collect())
    }

    fn number_of_pages(&mut self) -> Result<usize> {
        let Some(per_page) = self.page_size else {
            return Err(Error::configuration_required(
                "count pages",
                "page size must be set before querying the number of pages",
            ));
        };

        let total = self.number_of_elements()?;
        Ok(total.div_ceil(per_page))
    }

    fn number_of_elements(&mut self) -> Result<usize> {
        self.read_all_elements()?;
        Ok(self.position)
    }
}
