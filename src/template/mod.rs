//! Template rendering with strict-undefined semantics
//!
//! The expression and control-flow language is minijinja's; this module
//! configures the engine and defines the contract around it: every mapping
//! key is a top-level variable, referencing an unbound name is an error
//! (never a silent blank), and `resolve_package_path(name)` is available as
//! a callable backed by the [`PackageResolver`] given to the renderer.

pub mod resolver;

use std::sync::Arc;

use log::debug;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use thiserror::Error;

use crate::mappings::Mappings;

pub use resolver::{AmentResolver, PackageResolver, ResolveError};

/// Name under which package resolution is exposed to templates
pub const RESOLVE_PACKAGE_PATH: &str = "resolve_package_path";

/// Engine-provided globals that are never treated as template variables
const ENGINE_GLOBALS: &[&str] = &["range", "dict", "debug", "namespace", "loop"];

/// Ways a render call can fail
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template syntax error: {0}")]
    Syntax(#[source] minijinja::Error),

    #[error("undefined variable `{name}` referenced in template")]
    UndefinedVariable { name: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("template rendering failed: {0}")]
    Render(#[source] minijinja::Error),
}

/// Renders template text against a mapping set.
///
/// Rendering is a pure function of `(source, mappings, resolver)`: the
/// resolver is the only collaborator, and it is fixed at construction.
pub struct Renderer {
    resolver: Arc<dyn PackageResolver>,
}

impl Renderer {
    pub fn new(resolver: Arc<dyn PackageResolver>) -> Self {
        Self { resolver }
    }

    /// Render `source` with every mapping key bound as a top-level variable
    pub fn render(&self, source: &str, mappings: &Mappings) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // pure literal text must round-trip unchanged
        env.set_keep_trailing_newline(true);

        let resolver = Arc::clone(&self.resolver);
        env.add_function(
            RESOLVE_PACKAGE_PATH,
            move |name: String| -> Result<String, minijinja::Error> {
                match resolver.resolve(&name) {
                    Ok(path) => Ok(path.display().to_string()),
                    Err(err) => Err(minijinja::Error::new(
                        ErrorKind::InvalidOperation,
                        format!("cannot resolve package `{name}`"),
                    )
                    .with_source(err)),
                }
            },
        );

        let template = env.template_from_str(source).map_err(RenderError::Syntax)?;
        if let Some(name) = first_missing_variable(&template, mappings) {
            return Err(RenderError::UndefinedVariable { name });
        }
        debug!("rendering template with {} mapping(s)", mappings.len());
        template.render(mappings).map_err(classify)
    }
}

/// Lexicographically first template variable with no binding, if any
fn first_missing_variable(
    template: &minijinja::Template<'_, '_>,
    mappings: &Mappings,
) -> Option<String> {
    let mut missing: Vec<String> = template
        .undeclared_variables(false)
        .into_iter()
        .filter(|name| !mappings.contains_key(name))
        .filter(|name| name != RESOLVE_PACKAGE_PATH && !ENGINE_GLOBALS.contains(&name.as_str()))
        .collect();
    missing.sort();
    missing.into_iter().next()
}

/// Pull a typed resolver failure back out of the engine error chain; any
/// other failure stays an engine rendering error
fn classify(err: minijinja::Error) -> RenderError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(&err);
    while let Some(inner) = source {
        if let Some(resolve) = inner.downcast_ref::<ResolveError>() {
            return RenderError::Resolve(resolve.clone());
        }
        source = inner.source();
    }
    RenderError::Render(err)
}
