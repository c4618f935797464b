mod app;
mod commands;
mod error;
mod helpers;
mod printer;

use app::App as CLI;
use clap::Parser;
use starbase::tracing::{TracingOptions, setup_tracing};
use std::env;
use tracing::{debug, metadata::LevelFilter};

fn main() -> miette::Result<()> {
    let cli = CLI::parse();

    let _guard = setup_tracing(TracingOptions {
        default_level: cli.log.map(LevelFilter::from).unwrap_or(LevelFilter::WARN),
        filter_modules: vec!["sysnap".into(), "system_snapshot".into()],
        log_env: "SYSNAP_LOG".into(),
        test_env: "SYSNAP_TEST".into(),
        ..TracingOptions::default()
    });

    debug!(
        args = ?env::args().collect::<Vec<_>>(),
        "Running sysnap v{}",
        env!("CARGO_PKG_VERSION")
    );

    commands::show(&cli)
}
