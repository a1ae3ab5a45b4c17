//! Process-level diagnostics shared by the binaries
//!
//! Both write to stderr only; stdout carries machine-readable output.

use std::error::Error;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber, honouring `RUST_LOG` over `default_filter`
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Write `err` and its source chain to `out`, one cause per line
pub fn write_error_chain(out: &mut impl Write, err: &(dyn Error + 'static)) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")?;

    let mut cause = err.source();
    while let Some(inner) = cause {
        writeln!(out, "  caused by: {inner}")?;
        cause = inner.source();
    }

    Ok(())
}

/// Report a fatal error on stderr
pub fn print_error(err: &(dyn Error + 'static)) {
    let _ = write_error_chain(&mut std::io::stderr().lock(), err);
}
