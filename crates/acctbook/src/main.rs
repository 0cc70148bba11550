mod cli;
mod commands;

use acctbook_core::storage::DirStorage;
use acctbook_core::AccountStore;
use clap::Parser;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut store = AccountStore::load(DirStorage::new(&args.data_dir));
    tracing::info!(
        path = %args.data_dir.display(),
        accounts = store.len(),
        "loaded account store"
    );

    let output = commands::run(&mut store, args.command)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
