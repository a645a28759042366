//! YAML Loader module
//!
//! Parse pager definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `PagerDefinition` - Declarative paginator specification
//! - `SourceDefinition` - Source registration entries
//! - YAML parsing with validation

mod parser;
mod types;

pub use parser::{load_definition, load_definition_from_str};
pub use types::{PagerDefinition, SourceDefinition};

#[cfg(test)]
mod tests;
