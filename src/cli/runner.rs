//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::loader::{load_definition, PagerDefinition, SourceDefinition};
use crate::pagination::{CacheMode, Pagination, Paginator};
use serde_json::{json, Value};
use std::env;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its message
    pub fn run(&self) -> Result<()> {
        let msg = self.execute()?;
        self.output_message(&msg);
        Ok(())
    }

    /// Run the CLI command and return its message
    pub fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::Page { size, number } => self.page(*size, *number),
            Commands::Count => self.count(),
            Commands::Pages { size } => self.pages(*size),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the pager definition and merge command-line sources into it
    fn load_definition(&self) -> Result<PagerDefinition> {
        let mut def = match &self.cli.definition {
            Some(path) => load_definition(path)?,
            None => PagerDefinition::new("cli"),
        };

        if self.cli.windowed {
            def.cache = CacheMode::Windowed;
        }

        // Command-line paths are relative to the working directory, not the
        // definition file
        if !self.cli.files.is_empty() {
            let cwd = env::current_dir()?;
            for file in &self.cli.files {
                def.sources.push(SourceDefinition::File {
                    path: cwd.join(file),
                });
            }
        }

        if !self.cli.items.is_empty() {
            def.sources.push(SourceDefinition::Items {
                items: self.cli.items.clone(),
            });
        }

        Ok(def)
    }

    /// Build a paginator, letting explicit page settings override the definition
    fn build(&self, size: Option<i64>, number: Option<i64>) -> Result<Paginator<String>> {
        let mut def = self.load_definition()?;
        if size.is_some() {
            def.page_size = size;
        }
        if number.is_some() {
            def.page_number = number;
        }
        def.build()
    }

    /// Print the elements on one page
    fn page(&self, size: Option<i64>, number: Option<i64>) -> Result<Value> {
        let mut paginator = self.build(size, number)?;

        let Some(boundary) = paginator.boundary() else {
            return Err(Error::configuration_required(
                "print page",
                "page size and page number are required (use --size and --number)",
            ));
        };

        let elements = paginator.elements_on_page()?;

        Ok(json!({
            "type": "PAGE",
            "page": {
                "number": paginator.page_number(),
                "size": paginator.page_size(),
                "start": boundary.start,
                "end": boundary.end,
                "elements": elements
            }
        }))
    }

    /// Count every element
    fn count(&self) -> Result<Value> {
        let total = self.build(None, None)?.number_of_elements()?;

        Ok(json!({
            "type": "COUNT",
            "elements": total
        }))
    }

    /// Count pages for a page size
    fn pages(&self, size: Option<i64>) -> Result<Value> {
        let pages = self.build(size, None)?.number_of_pages()?;

        Ok(json!({
            "type": "PAGES",
            "pages": pages
        }))
    }

    /// Validate the pager definition
    fn validate(&self) -> Result<Value> {
        let def = self.load_definition()?;
        let paginator = def.build()?;

        Ok(json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Pager '{}' is valid with {} sources ({} cache)",
                    def.name,
                    paginator.source_count(),
                    match paginator.cache_mode() {
                        CacheMode::Full => "full",
                        CacheMode::Windowed => "windowed",
                    }
                )
            }
        }))
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
