use super::app::PlatformArgs;
use anyhow::Result;
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct ResolveArg {
    /// Component names, e.g. `amdclang++` or `/opt/rocm/bin/hipconfig`.
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl ResolveArg {
    pub fn run(&self, platform: &PlatformArgs) -> Result<()> {
        let toolchain = platform.toolchain()?;
        let resolved = platform.resolver(&toolchain).resolve(&self.names)?;
        for path in resolved {
            println!("{}", path.display());
        }
        Ok(())
    }
}
