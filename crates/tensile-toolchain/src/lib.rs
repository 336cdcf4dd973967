//! ROCm compiler toolchain resolution.
//!
//! Turns a bare component name (`amdclang++`, `clang-offload-bundler`, ...)
//! into a validated executable path, and scrapes a tool's version from its
//! own `--version` output.
//!
//! # Example
//!
//! ```no_run
//! use tensile_toolchain::{Toolchain, VersionQuery};
//!
//! let toolchain = Toolchain::host()?;
//! let cxx = toolchain.resolver().resolve_one(toolchain.defaults().cxx_compiler)?;
//! let version = VersionQuery::new().query(&cxx)?;
//! println!("{} {}", cxx.display(), version);
//! # Ok::<(), tensile_toolchain::Error>(())
//! ```

pub use defaults::{Role, ToolchainDefaults};
pub use error::{Error, Result};
pub use locate::{AsGiven, Chain, Locate};
pub use resolve::Resolver;
pub use tensile_platform::{OsFamily, Platform, Posix, SearchPath, VendorDirs, Windows};
pub use toolchain::Toolchain;
pub use version::{
    DEFAULT_VERSION_FLAG, DEFAULT_VERSION_PATTERN, ToolVersion, UNKNOWN_VERSION, VersionQuery,
    version,
};

mod classify;
mod command;
mod defaults;
mod error;
mod locate;
mod resolve;
mod toolchain;
mod version;
