//! Executable lookup strategies.
//!
//! A [`Locate`] maps a component name to an executable path, or declines.
//! Strategies compose with [`Chain`]; the first one to answer wins.

use std::path::{Path, PathBuf};
use tensile_platform::{SearchPath, is_executable};
use tracing::{debug, trace};

pub trait Locate {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Accepts the name unchanged when it already points at an executable,
/// relative to the current directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsGiven;

impl Locate for AsGiven {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if is_executable(path) {
            debug!(name, "executable as given");
            Some(path.to_path_buf())
        } else {
            None
        }
    }
}

impl Locate for SearchPath {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        for dir in self.iter() {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                debug!(name, path = %candidate.display(), "found in search path");
                return Some(candidate);
            }
            trace!(name, dir = %dir.display(), "not in directory");
        }
        None
    }
}

impl<L: Locate + ?Sized> Locate for &L {
    fn locate(&self, name: &str) -> Option<PathBuf> { (**self).locate(name) }
}

#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first:    A,
    fallback: B,
}

impl<A, B> Chain<A, B>
where
    A: Locate,
    B: Locate,
{
    pub fn new(first: A, fallback: B) -> Self { Self { first, fallback } }
}

impl<A, B> Locate for Chain<A, B>
where
    A: Locate,
    B: Locate,
{
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.first
            .locate(name)
            .or_else(|| self.fallback.locate(name))
    }
}
