//! rosjinja - render Jinja-style templates from typed command-line mappings
//!
//! Substitution values arrive as `key:=value` tokens whose values are
//! coerced into their natural types (integers stay integers, quoted
//! strings stay strings, bracketed lists keep per-element types) before
//! being bound as template variables. Rendering is strict: referencing an
//! unbound variable is an error, and `resolve_package_path(name)` is
//! available inside templates to locate installed package share
//! directories.
//!
//! # Example
//!
//! ```rust
//! use rosjinja::{load_mappings, render_str};
//!
//! let mappings = load_mappings(["name:=world", "count:=2"]);
//! let out = render_str("{{ name }} x{{ count }}", &mappings).unwrap();
//! assert_eq!(out, "world x2");
//! ```

pub mod logging;
pub mod mappings;
pub mod parser;
pub mod template;
pub mod value;

pub use mappings::{coerce, load_mappings, Mappings, REMAP};
pub use template::{
    AmentResolver, PackageResolver, RenderError, Renderer, ResolveError, RESOLVE_PACKAGE_PATH,
};
pub use value::Value;

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Errors from the top-level pipeline entry points
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read template `{}`: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to persist rendered output to a temporary file: {0}")]
    TempOutput(#[source] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Render template text, resolving packages through `AMENT_PREFIX_PATH`
pub fn render_str(source: &str, mappings: &Mappings) -> Result<String, Error> {
    render_str_with(source, mappings, Arc::new(AmentResolver::from_env()))
}

/// Render template text with an explicit package resolver
pub fn render_str_with(
    source: &str,
    mappings: &Mappings,
    resolver: Arc<dyn PackageResolver>,
) -> Result<String, Error> {
    Ok(Renderer::new(resolver).render(source, mappings)?)
}

/// Render a template file, resolving packages through `AMENT_PREFIX_PATH`
pub fn render_file(path: &Path, mappings: &Mappings) -> Result<String, Error> {
    render_file_with(path, mappings, Arc::new(AmentResolver::from_env()))
}

/// Render a template file with an explicit package resolver
pub fn render_file_with(
    path: &Path,
    mappings: &Mappings,
    resolver: Arc<dyn PackageResolver>,
) -> Result<String, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    render_str_with(&source, mappings, resolver)
}

/// Render a template file and persist the output to a named temporary file
/// that outlives the call; returns the temporary file's path
pub fn render_file_to_temp(path: &Path, mappings: &Mappings) -> Result<PathBuf, Error> {
    let rendered = render_file(path, mappings)?;
    let mut file = tempfile::Builder::new()
        .prefix("rosjinja_")
        .tempfile()
        .map_err(Error::TempOutput)?;
    file.write_all(rendered.as_bytes())
        .map_err(Error::TempOutput)?;
    let (_, temp_path) = file.keep().map_err(|err| Error::TempOutput(err.error))?;
    Ok(temp_path)
}
