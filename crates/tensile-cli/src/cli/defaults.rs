use super::app::PlatformArgs;
use anyhow::Result;
use clap::Args;
use tensile_toolchain::Role;

#[derive(Clone, Debug, Args)]
pub struct DefaultsArg {}

impl DefaultsArg {
    pub fn run(&self, platform: &PlatformArgs) -> Result<()> {
        let toolchain = platform.toolchain()?;
        let defaults = toolchain.defaults();
        println!("family: {}", toolchain.family());
        for role in Role::ALL {
            println!("{role}: {}", defaults.name(role));
        }
        println!("assembler: {}", defaults.assembler);
        let vendor = toolchain.vendor_dirs();
        println!("vendor bin: {}", vendor.primary.display());
        println!("vendor llvm bin: {}", vendor.llvm.display());
        Ok(())
    }
}
