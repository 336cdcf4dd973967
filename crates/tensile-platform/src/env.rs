use crate::os::OsFamily;
use crate::platform::VendorDirs;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Raw value of the family's search-path variable in this process.
pub fn path_var(family: OsFamily) -> Option<OsString> { env::var_os(family.path_var()) }

/// Split a search-path value on the family's list separator.
///
/// Empty entries are kept; joined with a file name they probe the current directory.
pub fn split_path_value(family: OsFamily, value: &OsStr) -> Vec<PathBuf> {
    if value.is_empty() {
        return Vec::new();
    }
    if family == OsFamily::host() {
        return env::split_paths(value).collect();
    }
    value
        .to_string_lossy()
        .split(family.path_list_separator())
        .map(PathBuf::from)
        .collect()
}

/// Ordered directories probed for an executable: vendor dirs first, then the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    family: OsFamily,
    dirs:   Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(family: OsFamily, vendor: &VendorDirs, path_value: Option<&OsStr>) -> Self {
        let mut dirs: Vec<PathBuf> = vendor.iter().map(Path::to_path_buf).collect();
        if let Some(value) = path_value {
            dirs.extend(split_path_value(family, value));
        }
        Self { family, dirs }
    }

    /// Search path built from the live environment.
    pub fn from_env(family: OsFamily, vendor: &VendorDirs) -> Self {
        Self::new(family, vendor, path_var(family).as_deref())
    }

    pub fn family(&self) -> OsFamily { self.family }

    pub fn dirs(&self) -> &[PathBuf] { &self.dirs }

    pub fn iter(&self) -> impl Iterator<Item = &Path> { self.dirs.iter().map(PathBuf::as_path) }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.family.path_list_separator();
        for (i, dir) in self.dirs.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{}", dir.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor() -> VendorDirs {
        VendorDirs {
            primary: PathBuf::from("/opt/rocm/bin"),
            llvm:    PathBuf::from("/opt/rocm/lib/llvm/bin"),
        }
    }

    #[test]
    fn test_vendor_dirs_come_first() {
        let value = env::join_paths(["/usr/local/bin", "/usr/bin"]).unwrap();
        let search = SearchPath::new(OsFamily::host(), &vendor(), Some(value.as_os_str()));
        let dirs: Vec<_> = search.iter().collect();
        assert_eq!(
            dirs,
            [
                Path::new("/opt/rocm/bin"),
                Path::new("/opt/rocm/lib/llvm/bin"),
                Path::new("/usr/local/bin"),
                Path::new("/usr/bin"),
            ]
        );
    }

    #[test]
    fn test_missing_path_var() {
        let search = SearchPath::new(OsFamily::Posix, &vendor(), None);
        assert_eq!(search.dirs().len(), 2);
    }

    #[test]
    fn test_display_posix() {
        let value = OsString::from("/a:/b");
        let search = SearchPath::new(OsFamily::Posix, &vendor(), Some(value.as_os_str()));
        assert_eq!(
            search.to_string(),
            "/opt/rocm/bin:/opt/rocm/lib/llvm/bin:/a:/b"
        );
    }

    #[test]
    fn test_windows_value_split_on_semicolon() {
        let value = OsString::from("C:/Tools;D:/bin");
        let vendor = VendorDirs {
            primary: PathBuf::from("C:/ROCm/6.2/bin"),
            llvm:    PathBuf::from("C:/ROCm/6.2/bin"),
        };
        let search = SearchPath::new(OsFamily::Windows, &vendor, Some(value.as_os_str()));
        assert_eq!(search.dirs().len(), 4);
        assert_eq!(
            search.to_string(),
            "C:/ROCm/6.2/bin;C:/ROCm/6.2/bin;C:/Tools;D:/bin"
        );
    }

    #[test]
    fn test_empty_value() {
        let value = OsString::new();
        assert!(split_path_value(OsFamily::Posix, &value).is_empty());
    }

    #[test]
    fn test_empty_entries_are_kept() {
        let value = OsString::from("/a::/b");
        let dirs = split_path_value(OsFamily::Posix, &value);
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[1], PathBuf::new());
    }
}
