use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tensile_toolchain::{DEFAULT_VERSION_FLAG, VersionQuery};

#[derive(Clone, Debug, Args)]
pub struct VersionArg {
    pub executable: PathBuf,

    /// Flag that makes the tool print its version.
    #[arg(long, default_value = DEFAULT_VERSION_FLAG, allow_hyphen_values = true)]
    pub flag: String,

    /// Case-insensitive regex whose first capture group is the version.
    #[arg(long)]
    pub pattern: Option<String>,
}

impl VersionArg {
    pub fn run(&self) -> Result<()> {
        let mut query = VersionQuery::new().flag(&self.flag);
        if let Some(pattern) = &self.pattern {
            query = query.pattern(pattern)?;
        }
        println!("{}", query.query(&self.executable)?);
        Ok(())
    }
}
