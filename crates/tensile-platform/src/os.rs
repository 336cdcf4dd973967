//! Operating system family conventions.

use std::fmt;

/// The two conventions the toolchain layout differs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Posix,
    Windows,
}

impl OsFamily {
    /// Family of the compilation target.
    pub const fn host() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Posix
        }
    }

    /// Name of the executable search-path environment variable.
    pub const fn path_var(self) -> &'static str {
        match self {
            OsFamily::Posix => "PATH",
            OsFamily::Windows => "Path",
        }
    }

    /// Separator between entries of the search-path variable.
    pub const fn path_list_separator(self) -> char {
        match self {
            OsFamily::Posix => ':',
            OsFamily::Windows => ';',
        }
    }

    pub const fn is_segment_separator(self, c: char) -> bool {
        match self {
            OsFamily::Posix => c == '/',
            OsFamily::Windows => c == '/' || c == '\\',
        }
    }

    /// Final path segment of `name`, ignoring trailing separators.
    ///
    /// Unlike [`std::path::Path::file_name`] this follows the family's rules rather
    /// than the host's, so `C:\ROCm\bin\clang.exe` yields `clang.exe` for
    /// [`OsFamily::Windows`] on any host.
    pub fn base_name(self, name: &str) -> &str {
        let trimmed = name.trim_end_matches(|c| self.is_segment_separator(c));
        match trimmed.rfind(|c| self.is_segment_separator(c)) {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Posix => f.write_str("posix"),
            OsFamily::Windows => f.write_str("nt"),
        }
    }
}

impl std::str::FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "linux" | "unix" => Ok(OsFamily::Posix),
            "windows" | "nt" => Ok(OsFamily::Windows),
            other => Err(format!("unknown OS family: {other}")),
        }
    }
}
