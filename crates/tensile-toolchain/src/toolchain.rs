use crate::defaults::ToolchainDefaults;
use crate::error::Result;
use crate::resolve::Resolver;
use once_cell::sync::OnceCell;
use std::ffi::OsStr;
use std::path::PathBuf;
use tensile_platform::{OsFamily, Platform, SearchPath, VendorDirs};
use tracing::debug;

static HOST: OnceCell<Toolchain> = OnceCell::new();

/// Immutable toolchain configuration: canonical names and vendor directories
/// for one OS family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    defaults: ToolchainDefaults,
    vendor:   VendorDirs,
}

impl Toolchain {
    /// Build the configuration for `platform`. On Windows this scans the ROCm
    /// root once; the result never re-scans.
    pub fn new(platform: &dyn Platform) -> Result<Self> {
        let family = platform.family();
        let vendor = platform.vendor_bin_dirs()?;
        debug!(%family, primary = %vendor.primary.display(), llvm = %vendor.llvm.display(), "toolchain configured");
        Ok(Self {
            defaults: ToolchainDefaults::for_family(family),
            vendor,
        })
    }

    /// Process-wide configuration for the host, computed on first use.
    pub fn host() -> Result<&'static Toolchain> {
        HOST.get_or_try_init(|| Self::new(&*tensile_platform::host()))
    }

    pub fn family(&self) -> OsFamily { self.defaults.family() }

    pub fn defaults(&self) -> &ToolchainDefaults { &self.defaults }

    pub fn vendor_dirs(&self) -> &VendorDirs { &self.vendor }

    /// Resolver over the vendor directories and the live search-path variable.
    pub fn resolver(&self) -> Resolver {
        let search = SearchPath::from_env(self.family(), &self.vendor);
        Resolver::new(self.defaults, search)
    }

    /// Resolver over the vendor directories and an explicit search-path value.
    pub fn resolver_with_path(&self, path_value: Option<&OsStr>) -> Resolver {
        let search = SearchPath::new(self.family(), &self.vendor, path_value);
        Resolver::new(self.defaults, search)
    }

    /// Resolve `names` against the current environment.
    pub fn validate<I, S>(&self, names: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolver().resolve(names)
    }
}
