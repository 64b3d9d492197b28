mod cli;
mod cli_cmds;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub(crate) use cli::{CatalogAction, FormatArg, ModeArg};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    cli::run()
}
