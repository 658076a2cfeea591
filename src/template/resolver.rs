//! Package share-directory resolution for template expressions
//!
//! Installed packages are discovered through the ament resource index: a
//! package `name` is registered under a prefix `P` when the marker file
//! `P/share/ament_index/resource_index/packages/name` exists, and its share
//! directory is `P/share/name`.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable listing the package search prefixes
pub const AMENT_PREFIX_PATH: &str = "AMENT_PREFIX_PATH";

/// Failure modes of a package lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("package search path is not configured (AMENT_PREFIX_PATH is unset or empty)")]
    EnvironmentNotConfigured,
    #[error("package `{name}` was not found in any configured prefix")]
    PackageNotFound { name: String },
}

/// Maps a package name to its installed share directory
pub trait PackageResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError>;
}

/// Resolver backed by the ament resource-index directory layout
#[derive(Debug, Clone, Default)]
pub struct AmentResolver {
    prefixes: Vec<PathBuf>,
}

impl AmentResolver {
    /// Create a resolver with an explicit prefix list
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Create a resolver from `AMENT_PREFIX_PATH`, read once here.
    ///
    /// An unset or empty variable produces a resolver with no prefixes;
    /// the error surfaces only when a lookup is actually performed.
    pub fn from_env() -> Self {
        let prefixes = match env::var_os(AMENT_PREFIX_PATH) {
            Some(raw) => env::split_paths(&raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        Self { prefixes }
    }
}

impl PackageResolver for AmentResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        if self.prefixes.is_empty() {
            return Err(ResolveError::EnvironmentNotConfigured);
        }
        for prefix in &self.prefixes {
            let marker = prefix
                .join("share")
                .join("ament_index")
                .join("resource_index")
                .join("packages")
                .join(name);
            if marker.is_file() {
                return Ok(prefix.join("share").join(name));
            }
        }
        Err(ResolveError::PackageNotFound {
            name: name.to_string(),
        })
    }
}
