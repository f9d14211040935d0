//! Log setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use kaleido_config::Config;
use tracing_subscriber::EnvFilter;

/// Install a file-backed `tracing` subscriber when the config names a log
/// file. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .wrap_err_with(|| format!("invalid log level {:?}", config.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
