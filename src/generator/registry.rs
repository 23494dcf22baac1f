//! Closed, name-keyed dispatch of directives to generators.

use crate::config::Config;
use crate::directive::Directive;
use crate::error::{MdautogenError, Result};
use std::collections::BTreeMap;
use tracing::debug;

use super::code_table::CodeTable;

/// Everything a generator may consult besides its arguments.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Run configuration (path resolution, cell trimming).
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one rewrite run.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// A named rendering operation invoked by a directive.
pub trait Generator {
    /// Command name used in directives.
    fn name(&self) -> &'static str;

    /// Render the block that replaces a marker region.
    ///
    /// Only argument problems are errors; recoverable failures such as a
    /// missing input file belong in the returned text.
    fn render(&self, args: &[String], ctx: &RenderContext<'_>) -> Result<String>;
}

/// The set of generators available to directives.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// A registry holding every built-in generator.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CodeTable));
        registry
    }

    /// Add a generator, replacing any existing one with the same name.
    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.name(), generator);
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    /// Run the generator named by `directive`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The generated block
    /// * `Err(MdautogenError::UnknownDirective)` - No generator has that name
    /// * `Err(MdautogenError::DirectiveArguments)` - The generator rejected the arguments
    pub fn dispatch(&self, directive: &Directive, ctx: &RenderContext<'_>) -> Result<String> {
        let generator = self.generators.get(directive.name.as_str()).ok_or_else(|| {
            MdautogenError::UnknownDirective {
                name: directive.name.clone(),
                available: self.names().join(", "),
            }
        })?;

        debug!(directive = %directive, "dispatching directive");
        generator.render(&directive.args, ctx)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
