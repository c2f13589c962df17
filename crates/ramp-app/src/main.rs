mod cli;
mod commands;

use ramp_common::StudioError;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let loaded = ramp_config::load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::debug!("Ramp Studio v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ramp_config::RampStudioConfig::default()
        }
    };
    if let Some(store) = args.store {
        config.store.path = store;
    }

    match commands::run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_report(&e));
            ExitCode::FAILURE
        }
    }
}

/// User-facing text for a failed command. A malformed palette document gets
/// a hint, since nothing else works until the file is fixed by hand.
fn error_report(err: &StudioError) -> String {
    match err {
        StudioError::Store(store) if store.is_data_format() => {
            format!(
                "error: the palette document could not be read\n{store}\n\
                 fix the file and run the command again"
            )
        }
        other => format!("error: {other}"),
    }
}
