use super::defaults::DefaultsArg;
use super::resolve::ResolveArg;
use super::version::VersionArg;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tensile_toolchain::{OsFamily, Platform, Posix, Resolver, Toolchain, Windows};

#[derive(Clone, Debug, Parser)]
#[command(name = "tensile-toolchain", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Log resolution and discovery steps to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub platform: PlatformArgs,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "r", name = "resolve", about = "Resolve toolchain components to executable paths")]
    Resolve(ResolveArg),
    #[command(alias = "v", name = "version", about = "Print the version a tool reports")]
    Version(VersionArg),
    #[command(alias = "d", name = "defaults", about = "Print canonical component names and vendor directories")]
    Defaults(DefaultsArg),
}

#[derive(Clone, Debug, Default, Args)]
pub struct PlatformArgs {
    /// OS family conventions to apply (`posix` or `windows`); defaults to the host.
    #[arg(long, global = true)]
    pub family: Option<OsFamily>,

    /// ROCm root scanned for `MAJOR.MINOR` installations (Windows family only).
    #[arg(long, global = true)]
    pub rocm_root: Option<PathBuf>,

    /// Search-path value used instead of the environment's.
    #[arg(long, global = true)]
    pub search_path: Option<OsString>,
}

impl PlatformArgs {
    pub fn toolchain(&self) -> Result<Toolchain> {
        if self.family.is_none() && self.rocm_root.is_none() {
            let host = Toolchain::host().context("failed to configure host toolchain")?;
            return Ok(host.clone());
        }

        let family = self.family.unwrap_or_else(OsFamily::host);
        let platform: Box<dyn Platform> = match (family, &self.rocm_root) {
            (OsFamily::Windows, Some(root)) => Box::new(Windows::with_root(root)),
            (OsFamily::Windows, None) => Box::new(Windows::new()),
            (OsFamily::Posix, _) => Box::new(Posix),
        };
        Toolchain::new(&*platform).with_context(|| format!("failed to configure {family} toolchain"))
    }

    pub fn resolver(&self, toolchain: &Toolchain) -> Resolver {
        match &self.search_path {
            Some(value) => toolchain.resolver_with_path(Some(value.as_os_str())),
            None => toolchain.resolver(),
        }
    }
}

impl App {
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Commands::Resolve(arg) => arg.run(&self.platform),
            Commands::Version(arg) => arg.run(),
            Commands::Defaults(arg) => arg.run(&self.platform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let app = App::try_parse_from([
            "tensile-toolchain",
            "resolve",
            "amdclang++",
            "hipconfig",
            "--family",
            "posix",
            "--search-path",
            "/opt/bin",
        ])
        .unwrap();
        assert_eq!(app.platform.family, Some(OsFamily::Posix));
        assert_eq!(app.platform.search_path, Some(OsString::from("/opt/bin")));
        let Commands::Resolve(arg) = app.cmd else {
            panic!("expected resolve");
        };
        assert_eq!(arg.names, ["amdclang++", "hipconfig"]);
    }

    #[test]
    fn test_parse_version_defaults() {
        let app = App::try_parse_from(["tensile-toolchain", "version", "/opt/rocm/bin/amdclang"]).unwrap();
        let Commands::Version(arg) = app.cmd else {
            panic!("expected version");
        };
        assert_eq!(arg.flag, "--version");
        assert!(arg.pattern.is_none());
    }

    #[test]
    fn test_resolve_requires_a_name() {
        assert!(App::try_parse_from(["tensile-toolchain", "resolve"]).is_err());
    }

    #[test]
    fn test_unknown_family_rejected() {
        assert!(App::try_parse_from(["tensile-toolchain", "defaults", "--family", "beos"]).is_err());
    }

    #[test]
    fn test_posix_toolchain_from_args() {
        let args = PlatformArgs {
            family: Some(OsFamily::Posix),
            ..Default::default()
        };
        let tc = args.toolchain().unwrap();
        assert_eq!(tc.family(), OsFamily::Posix);
    }
}
