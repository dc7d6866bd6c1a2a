use anyhow::Result;
use clap::Parser;
use gambit::cli::{App, Cli};

fn main() -> Result<()> {
    // Initialize tracing (RUST_LOG controls engine log verbosity)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    App::new(cli.ascii, cli.json).run()
}
