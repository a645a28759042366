//! YAML parser for pager definitions
//!
//! Parses and validates pager YAML files.

use crate::error::{Error, Result};
use crate::loader::types::{PagerDefinition, SourceDefinition};
use std::fs;
use std::path::Path;

/// Load a pager definition from a file path
///
/// Relative source paths in the definition resolve against the directory
/// containing the file.
///
/// # Examples
///
/// ```ignore
/// let definition = load_definition("./words.yaml")?;
/// let mut paginator = definition.build()?;
/// ```
pub fn load_definition(path: impl AsRef<Path>) -> Result<PagerDefinition> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read pager file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let mut def = load_definition_from_str(&content)?;
    def.base_dir = path.parent().map(Path::to_path_buf);
    Ok(def)
}

/// Load a pager definition from a YAML string
pub fn load_definition_from_str(yaml: &str) -> Result<PagerDefinition> {
    let def: PagerDefinition = serde_yaml::from_str(yaml)?;

    validate_definition(&def)?;
    Ok(def)
}

/// Validate a pager definition
fn validate_definition(def: &PagerDefinition) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::config("Pager name cannot be empty"));
    }

    if let Some(size) = def.page_size {
        if size < 1 {
            return Err(Error::config(format!(
                "Pager '{}': page_size must be at least 1, got {}",
                def.name, size
            )));
        }
    }

    if let Some(number) = def.page_number {
        if number < 1 {
            return Err(Error::config(format!(
                "Pager '{}': page_number must be at least 1, got {}",
                def.name, number
            )));
        }
    }

    for (index, source) in def.sources.iter().enumerate() {
        if let SourceDefinition::File { path } = source {
            if path.as_os_str().is_empty() {
                return Err(Error::config(format!(
                    "Pager '{}': source {} has an empty file path",
                    def.name, index
                )));
            }
        }
    }

    Ok(())
}
