mod cli;
mod commands;

use std::path::Path;

use picker_common::ConfigError;
use picker_config::PickerConfig;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["hsb_picker", "picker_core", "picker_config"];

/// Level used while the config itself is being loaded.
const BOOTSTRAP_LEVEL: &str = "info";

/// Turn a bare level into a directive covering our crates; pass anything
/// else through as a full filter directive.
fn log_directive(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Pick the filter: `--log-level` wins, then a non-empty `RUST_LOG`, then
/// the configured level.
fn log_filter(cli_level: Option<&str>, env: Option<&str>, config_level: &str) -> EnvFilter {
    let directives = match (cli_level, env.filter(|e| !e.trim().is_empty())) {
        (Some(level), _) => log_directive(level),
        (None, Some(env)) => env.to_string(),
        (None, None) => log_directive(config_level),
    };
    EnvFilter::builder().parse_lossy(directives)
}

fn load_config(path: Option<&str>) -> Result<PickerConfig, ConfigError> {
    match path {
        Some(path) => picker_config::load_config_from(Path::new(path)),
        None => picker_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // A scoped subscriber so the loader's own log lines are not lost
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level.as_deref(),
            env.as_deref(),
            BOOTSTRAP_LEVEL,
        ))
        .with_writer(std::io::stderr)
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || {
        load_config(args.config.as_deref())
    });
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (PickerConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level.as_deref(),
            env.as_deref(),
            config.logging.level.as_filter(),
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hsb-picker v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    match commands::run(args.command, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
