//! Whitelist classification of component names.
//!
//! A name is supported for a role when it, or its final path segment, equals
//! the role's canonical name exactly. There is no suffix stripping and no case
//! folding: `clang++-17` and `AMDCLANG++` are both rejected.

use crate::defaults::{Role, ToolchainDefaults};

impl ToolchainDefaults {
    pub fn supports(&self, name: &str, role: Role) -> bool {
        let target = self.name(role);
        name == target || self.family().base_name(name) == target
    }

    pub fn is_supported_c_compiler(&self, name: &str) -> bool {
        self.supports(name, Role::CCompiler)
    }

    pub fn is_supported_cxx_compiler(&self, name: &str) -> bool {
        self.supports(name, Role::CxxCompiler)
    }

    pub fn is_supported_offload_bundler(&self, name: &str) -> bool {
        self.supports(name, Role::OffloadBundler)
    }

    pub fn is_supported_device_info(&self, name: &str) -> bool {
        self.supports(name, Role::DeviceInfo)
    }

    /// Role whose canonical name `name` matches, if any.
    pub fn classify(&self, name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| self.supports(name, *role))
    }

    pub fn is_supported_component(&self, name: &str) -> bool {
        self.is_supported_cxx_compiler(name)
            || self.is_supported_c_compiler(name)
            || self.is_supported_offload_bundler(name)
            || self.is_supported_device_info(name)
    }
}
