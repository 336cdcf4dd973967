//! Read-only executable checks.

use std::path::Path;

/// Whether `path` is a regular file the current process may execute.
///
/// On Unix this defers to `access(2)` with `X_OK`, so ownership and ACLs are
/// honoured the same way the kernel would. Elsewhere any regular file passes.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use nix::unistd::{AccessFlags, access};
        access(path, AccessFlags::X_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        true
    }
}
