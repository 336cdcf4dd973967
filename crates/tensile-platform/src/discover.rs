//! Discovery of version-numbered installation directories.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

static VERSION_DIR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?<major>[0-9]+)\.(?<minor>[0-9]+)$").unwrap());

/// Parse a directory name of the form `MAJOR.MINOR`.
pub fn parse_version_dir(name: &str) -> Option<(u64, u64)> {
    let caps = VERSION_DIR_REGEX.captures(name)?;
    let major = caps.name("major")?.as_str().parse().ok()?;
    let minor = caps.name("minor")?.as_str().parse().ok()?;
    Some((major, minor))
}

/// Immediate subdirectory of `root` with the greatest `MAJOR.MINOR` name.
///
/// Versions compare numerically, so `10.0` outranks `9.5`.
pub fn latest_versioned_dir(root: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(root).map_err(|source| Error::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut latest: Option<((u64, u64), PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(version) = entry.file_name().to_str().and_then(parse_version_dir) else {
            trace!(path = %path.display(), "skipping non-version entry");
            continue;
        };
        if !path.is_dir() {
            trace!(path = %path.display(), "skipping version-named file");
            continue;
        }
        debug!(path = %path.display(), ?version, "found versioned installation");
        if latest.as_ref().is_none_or(|(best, _)| version > *best) {
            latest = Some((version, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| Error::NoInstallation {
            root: root.to_path_buf(),
        })
}
