use anyhow::{anyhow, Result};
use getarg::{config, ParsedArgs};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = ParsedArgs::from_argv(std::env::args());
    init_tracing(args.get_bool("-debug"))?;
    config::install(args);

    let args = config::current();
    let mut entries: Vec<(&str, &str)> = args.iter().collect();
    entries.sort_unstable();

    let mut out = io::stdout().lock();
    for (key, value) in entries {
        writeln!(out, "{key}={value}")?;
    }
    if args.get_bool("-positionals") {
        for token in args.positionals() {
            writeln!(out, "+ {token}")?;
        }
    }
    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "getarg=debug" } else { "getarg=warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
