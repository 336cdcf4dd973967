//! Host conventions the ROCm toolchain lookup depends on.
//!
//! - [`OsFamily`]: POSIX vs. Windows naming and path-list rules.
//! - [`Platform`]: where the vendor binaries live, with a fixed layout on POSIX
//!   and a discovered `MAJOR.MINOR` layout on Windows.
//! - [`SearchPath`]: the ordered directory list probed during resolution.
//! - [`is_executable`]: the read-only probe used on each candidate.

pub use discover::{latest_versioned_dir, parse_version_dir};
pub use env::{SearchPath, path_var, split_path_value};
pub use error::{Error, Result};
pub use os::OsFamily;
pub use platform::{Platform, Posix, VendorDirs, Windows, for_family, host};
pub use probe::is_executable;

pub mod discover;
pub mod env;
mod error;
pub mod os;
pub mod platform;
pub mod probe;
