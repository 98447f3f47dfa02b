mod cli;

use cli::Args;
use related_images::adapters::outbound::environment::ProcessEnvironment;
use related_images::config::{build_defaults, discover_config, load_config_from_path};
use related_images::images::services::ImageResolver;
use related_images::shared::error::ExitCode;
use related_images::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> process::ExitCode {
    init_logging();

    let code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::ExitCode::from(code.as_u8())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(Path::new("."))?,
    };

    let defaults = build_defaults(config.as_ref(), args.registry.as_deref())?;
    tracing::debug!(registry = defaults.registry(), "using default registry");

    let resolver = ImageResolver::with_defaults(ProcessEnvironment::new(), defaults);
    let images = match args.component {
        Some(component) => vec![resolver.resolve_detailed(component)],
        None => resolver.resolve_all(),
    };

    let output = args.format.create_formatter().format(&images)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}
