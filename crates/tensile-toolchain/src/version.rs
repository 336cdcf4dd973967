//! Version scraping from a tool's own `--version` output.

use crate::command::Command;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::path::Path;

pub const DEFAULT_VERSION_FLAG: &str = "--version";
pub const DEFAULT_VERSION_PATTERN: &str = r"version\s+([\d.]+)";
pub const UNKNOWN_VERSION: &str = "<unknown>";

static DEFAULT_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(DEFAULT_VERSION_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Version token scraped from tool output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolVersion {
    Known(String),
    Unknown,
}

impl ToolVersion {
    pub fn as_str(&self) -> &str {
        match self {
            ToolVersion::Known(v) => v,
            ToolVersion::Unknown => UNKNOWN_VERSION,
        }
    }

    pub fn is_known(&self) -> bool { matches!(self, ToolVersion::Known(_)) }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// How to ask a tool for its version and where to find it in the answer.
#[derive(Debug, Clone)]
pub struct VersionQuery {
    flag:    String,
    pattern: Regex,
}

impl Default for VersionQuery {
    fn default() -> Self { Self::new() }
}

impl VersionQuery {
    pub fn new() -> Self {
        Self {
            flag:    DEFAULT_VERSION_FLAG.to_string(),
            pattern: DEFAULT_REGEX.clone(),
        }
    }

    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Replace the pattern. It is matched case-insensitively and its first
    /// capture group is the version.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason:  e.to_string(),
            })?;
        if regex.captures_len() < 2 {
            return Err(Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason:  "pattern has no capture group".to_string(),
            });
        }
        self.pattern = regex;
        Ok(self)
    }

    pub fn version_flag(&self) -> &str { &self.flag }

    pub fn as_regex(&self) -> &Regex { &self.pattern }

    /// First capture of the first match in `output`, trimmed.
    pub fn extract(&self, output: &str) -> ToolVersion {
        self.pattern
            .captures(output.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
            .map_or(ToolVersion::Unknown, |v| ToolVersion::Known(v.to_string()))
    }

    /// Run `executable <flag>` and scrape its stdout.
    ///
    /// Blocks until the child exits; there is no timeout.
    pub fn query(&self, executable: impl AsRef<Path>) -> Result<ToolVersion> {
        let output = Command::new(executable.as_ref())
            .arg(&self.flag)
            .capture_stdout()?;
        Ok(self.extract(&output))
    }
}

/// Version of `executable` using the default flag and pattern.
pub fn version(executable: impl AsRef<Path>) -> Result<ToolVersion> {
    VersionQuery::new().query(executable)
}
