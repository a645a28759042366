//! Loader types
//!
//! Declarative pager definition types for YAML parsing.

use crate::error::Result;
use crate::pagination::{CacheMode, Pagination, Paginator};
use crate::source::LineSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// ============================================================================
// Pager Definition
// ============================================================================

/// Top-level pager definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PagerDefinition {
    /// Pager name
    pub name: String,
    /// Caching mode
    #[serde(default)]
    pub cache: CacheMode,
    /// Elements per page
    #[serde(default)]
    pub page_size: Option<i64>,
    /// 1-based page number
    #[serde(default)]
    pub page_number: Option<i64>,
    /// Sources, in registration order
    #[serde(default)]
    pub sources: Vec<SourceDefinition>,
    /// Directory relative file paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

// ============================================================================
// Source Definition
// ============================================================================

/// Source definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceDefinition {
    /// Inline list of elements
    Items {
        /// Elements in order
        items: Vec<String>,
    },
    /// Lines of a text file
    File {
        /// File path
        path: PathBuf,
    },
}

impl PagerDefinition {
    /// Create an empty definition with full caching
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache: CacheMode::default(),
            page_size: None,
            page_number: None,
            sources: Vec::new(),
            base_dir: None,
        }
    }

    /// Resolve a source file path against the base directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Build a paginator with every source registered and the page applied
    ///
    /// Files are opened here; their lines are read lazily by the paginator.
    pub fn build(&self) -> Result<Paginator<String>> {
        let mut paginator = Paginator::new(self.cache);

        for source in &self.sources {
            match source {
                SourceDefinition::Items { items } => paginator.add_elements(items.clone()),
                SourceDefinition::File { path } => {
                    paginator.add_elements(LineSource::open(self.resolve_path(path))?);
                }
            }
        }

        if let Some(size) = self.page_size {
            paginator.set_page_size(size)?;
        }
        if let Some(number) = self.page_number {
            paginator.set_page_number(number)?;
        }

        debug!(
            "Built pager '{}' with {} sources ({:?} cache)",
            self.name,
            paginator.source_count(),
            self.cache
        );
        Ok(paginator)
    }
}
