//! # Page Builder CLI
//!
//! Browse the component library and export layouts as component source.

use builder_cli::{export_layout, render_library, CliArgs, Command, ExportConfig};
use builder_core::Library;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing on stderr with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: info,builder_core=debug,builder_cli=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,builder_core=debug,builder_cli=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    match args.command {
        Command::Library { search, json } => {
            let library = Library::builtin();
            print!("{}", render_library(&library, search.as_deref(), json)?);
        }
        command @ Command::Export { .. } => {
            let config = ExportConfig::try_from(command)?;
            tracing::info!(
                "Exporting {} as {}",
                config.layout.display(),
                config.codegen.file_name()
            );
            let outcome = export_layout(&config)?;
            if outcome.written.is_none() {
                print!("{}", outcome.code);
            }
        }
    }

    Ok(())
}
