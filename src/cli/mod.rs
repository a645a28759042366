//! CLI module
//!
//! Command-line interface for paging through files and inline lists.
//!
//! # Commands
//!
//! - `page` - Print the elements on one page
//! - `count` - Count every element
//! - `pages` - Count pages for a page size
//! - `validate` - Check a pager definition

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
