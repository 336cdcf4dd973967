//! Error types for toolchain resolution and version queries.

use tensile_platform::OsFamily;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no toolchain components to validate, at least one is required")]
    Configuration,

    #[error("`{name}` is not a supported toolchain component for OS: {family}")]
    UnsupportedComponent { name: String, family: OsFamily },

    #[error("`{name}` either not found or not executable in any search path: {search_path}")]
    NotFound { name: String, search_path: String },

    #[error("toolchain discovery failed: {0}")]
    Discovery(#[from] tensile_platform::Error),

    #[error("failed to get version when calling `{command}`: {source}")]
    VersionQuery {
        command: String,
        source:  std::io::Error,
    },

    #[error("invalid version pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
