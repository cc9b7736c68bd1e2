mod cli;
mod run;
mod shell;

use std::process::ExitCode;

use opdeck_common::OpdeckError;
use opdeck_config::OpdeckConfig;
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "opdeck=info";

fn init_logging(level: Option<&str>) {
    let directive = match level {
        Some(l) if !l.contains('=') && !l.contains(',') => format!("opdeck={l}"),
        Some(l) => l.to_string(),
        None => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log level {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Load config from `--config` or the platform default.
fn load_config(path: Option<&std::path::Path>) -> Result<OpdeckConfig, OpdeckError> {
    let config = match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            opdeck_config::load_config_from(path)?
        }
        None => opdeck_config::load_config()?,
    };
    Ok(config)
}

fn print_paths() -> Result<(), OpdeckError> {
    let paths = serde_json::json!({
        "config_file": opdeck_config::paths::config_file()?,
        "data_dir": opdeck_config::paths::data_dir()?,
        "widths_file": opdeck_config::paths::widths_file()?,
    });
    println!("{paths:#}");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    let result = match args.command.clone().unwrap_or_default() {
        Command::CheckConfig => load_config(args.config.as_deref()).map(|config| {
            println!("{}", opdeck_config::config_to_json(&config));
        }),
        Command::Paths => print_paths(),
        Command::Run { tick_ms } => {
            tracing::info!("Opdeck v{} starting...", env!("CARGO_PKG_VERSION"));
            let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
                tracing::warn!("Config load failed, using defaults: {e}");
                OpdeckConfig::default()
            });
            run::run(config, tick_ms)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("opdeck: {e}");
            ExitCode::FAILURE
        }
    }
}
