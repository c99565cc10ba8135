//! tiny-pkg-config CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tiny_pkg_config::cli::{Cli, QueryCommand};
use tiny_pkg_config::search::SearchPath;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries query output. Level is
/// controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tiny_pkg_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tiny_pkg_config=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn report(message: &str) {
    eprintln!("{} {}", style("Error:").for_stderr().red().bold(), message);
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("tiny-pkg-config starting with args: {:?}", cli);

    let search = SearchPath::from_env();
    tracing::debug!("Search path: {:?}", search);

    let Some(query) = QueryCommand::from_cli(&cli, search) else {
        report("Please specify a package name");
        return ExitCode::from(1);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match query.execute(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            report(&e.to_string());
            ExitCode::from(1)
        }
    }
}
