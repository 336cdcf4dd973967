//! Resolution of component names to executable paths.

use crate::defaults::ToolchainDefaults;
use crate::error::{Error, Result};
use crate::locate::{AsGiven, Chain, Locate};
use std::path::PathBuf;
use tensile_platform::SearchPath;
use tracing::debug;

/// Resolves whitelisted component names against a fixed search path.
///
/// Nothing is cached: every call probes the filesystem again.
#[derive(Debug, Clone)]
pub struct Resolver {
    defaults: ToolchainDefaults,
    search:   SearchPath,
}

impl Resolver {
    pub fn new(defaults: ToolchainDefaults, search: SearchPath) -> Self { Self { defaults, search } }

    pub fn search_path(&self) -> &SearchPath { &self.search }

    pub fn defaults(&self) -> &ToolchainDefaults { &self.defaults }

    /// Resolve a single component.
    ///
    /// The name is returned unchanged if it is already executable from the
    /// current directory, otherwise the first search directory holding an
    /// executable of that name wins.
    pub fn resolve_one(&self, name: &str) -> Result<PathBuf> {
        if !self.defaults.is_supported_component(name) {
            return Err(Error::UnsupportedComponent {
                name:   name.to_string(),
                family: self.defaults.family(),
            });
        }

        let path = Chain::new(AsGiven, &self.search)
            .locate(name)
            .ok_or_else(|| Error::NotFound {
                name:        name.to_string(),
                search_path: self.search.to_string(),
            })?;
        debug!(name, path = %path.display(), "resolved toolchain component");
        Ok(path)
    }

    /// Resolve every component, in order. Fails on the first error.
    pub fn resolve<I, S>(&self, names: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = names
            .into_iter()
            .map(|name| self.resolve_one(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if resolved.is_empty() {
            return Err(Error::Configuration);
        }
        Ok(resolved)
    }
}
