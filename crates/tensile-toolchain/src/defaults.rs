//! Canonical component names per OS family.

use std::fmt;
use tensile_platform::OsFamily;

/// The toolchain components the build pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    CCompiler,
    CxxCompiler,
    OffloadBundler,
    DeviceInfo,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::CCompiler,
        Role::CxxCompiler,
        Role::OffloadBundler,
        Role::DeviceInfo,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::CCompiler => "C compiler",
            Role::CxxCompiler => "C++/HIP compiler",
            Role::OffloadBundler => "offload bundler",
            Role::DeviceInfo => "device-info tool",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainDefaults {
    family:              OsFamily,
    pub c_compiler:      &'static str,
    pub cxx_compiler:    &'static str,
    pub offload_bundler: &'static str,
    pub device_info:     &'static str,
    /// Assembling goes through the C++ driver; not a role of its own.
    pub assembler:       &'static str,
}

impl ToolchainDefaults {
    pub const fn for_family(family: OsFamily) -> Self {
        match family {
            OsFamily::Posix => Self {
                family,
                c_compiler: "amdclang",
                cxx_compiler: "amdclang++",
                offload_bundler: "clang-offload-bundler",
                device_info: "hipconfig",
                assembler: "amdclang++",
            },
            OsFamily::Windows => Self {
                family,
                c_compiler: "clang.exe",
                cxx_compiler: "clang++.exe",
                offload_bundler: "clang-offload-bundler.exe",
                device_info: "hipconfig",
                assembler: "clang++.exe",
            },
        }
    }

    pub const fn family(&self) -> OsFamily { self.family }

    pub const fn name(&self, role: Role) -> &'static str {
        match role {
            Role::CCompiler => self.c_compiler,
            Role::CxxCompiler => self.cxx_compiler,
            Role::OffloadBundler => self.offload_bundler,
            Role::DeviceInfo => self.device_info,
        }
    }
}
