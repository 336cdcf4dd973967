//! Vendor install layout per OS family.

use crate::discover::latest_versioned_dir;
use crate::error::Result;
use crate::os::OsFamily;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ROCM_BIN_PATH: &str = "/opt/rocm/bin";
pub const ROCM_LLVM_BIN_PATH: &str = "/opt/rocm/lib/llvm/bin";
pub const WINDOWS_ROCM_ROOT: &str = "C:/Program Files/AMD/ROCm";

/// The two vendor directories searched ahead of the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDirs {
    pub primary: PathBuf,
    pub llvm:    PathBuf,
}

impl VendorDirs {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.primary.as_path(), self.llvm.as_path()].into_iter()
    }
}

pub trait Platform: Debug + Send + Sync {
    fn family(&self) -> OsFamily;

    fn vendor_bin_dirs(&self) -> Result<VendorDirs>;
}

/// Fixed `/opt/rocm` layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

impl Platform for Posix {
    fn family(&self) -> OsFamily { OsFamily::Posix }

    fn vendor_bin_dirs(&self) -> Result<VendorDirs> {
        Ok(VendorDirs {
            primary: PathBuf::from(ROCM_BIN_PATH),
            llvm:    PathBuf::from(ROCM_LLVM_BIN_PATH),
        })
    }
}

/// `<root>/<MAJOR.MINOR>/bin` layout; LLVM tools share the ROCm bin directory.
#[derive(Debug, Clone)]
pub struct Windows {
    root: PathBuf,
}

impl Default for Windows {
    fn default() -> Self { Self::new() }
}

impl Windows {
    pub fn new() -> Self { Self::with_root(WINDOWS_ROCM_ROOT) }

    pub fn with_root(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }
}

impl Platform for Windows {
    fn family(&self) -> OsFamily { OsFamily::Windows }

    fn vendor_bin_dirs(&self) -> Result<VendorDirs> {
        let bin = latest_versioned_dir(&self.root)?.join("bin");
        debug!(bin = %bin.display(), "selected latest ROCm installation");
        Ok(VendorDirs {
            primary: bin.clone(),
            llvm:    bin,
        })
    }
}

/// Platform implementation for the given family with its default layout.
pub fn for_family(family: OsFamily) -> Box<dyn Platform> {
    match family {
        OsFamily::Posix => Box::new(Posix),
        OsFamily::Windows => Box::new(Windows::new()),
    }
}

/// Platform implementation for the compilation target.
pub fn host() -> Box<dyn Platform> { for_family(OsFamily::host()) }
