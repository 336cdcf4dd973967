use anyhow::Result;
use clap::Parser;
use cli::App;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let app = App::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run()
}
