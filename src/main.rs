use pinvault::app;
use pinvault::store::local::LocalVaultStore;

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::sync::Arc;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("pinvault", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let path = LocalVaultStore::default_path()
        .context("no local data directory available for the vault")?;
    log::debug!("opening vault at {}", path.display());

    let store = Arc::new(LocalVaultStore::open(path).context("failed to open the vault")?);

    app::run(store)?;
    Ok(())
}
