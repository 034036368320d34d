use std::time::Instant;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::flags::{Merklap, MerklapCmd};

mod build;
mod check;
mod config;
mod flags;

pub const CONFIG_FILE: &str = "merklap.toml";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn main() {
    init_tracing();

    let flags = Merklap::from_env_or_exit();
    let start = Instant::now();
    let result = Config::from_flags(&flags).and_then(|config| match &flags.subcommand {
        MerklapCmd::Build(cmd) => build::run(&config, cmd.output.as_deref()).map(|_| ()),
        MerklapCmd::Check(_) => check::run(&config),
    });

    tracing::info!("total time: {}ms", start.elapsed().as_millis());
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
