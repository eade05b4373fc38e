use crate::{CliError, CliResult};

use pf_config::LoggingConfig;

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the fern logger.
///
/// Records go to the configured file, else to stderr so stdout only carries
/// command output. Colors apply to stderr only.
#[track_caller]
pub fn initialize(config: &LoggingConfig) -> CliResult<()> {
    let level_filter = *config.level;

    let dispatch = if let Some(ref log_path) = config.file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| CliError::logger(format!("Failed to open log file {log_path}: {e}")))?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{target}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    target = record.target(),
                ))
            })
            .chain(file)
    } else if config.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339_seconds(SystemTime::now()),
                    level = colors.color(record.level()),
                ))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339_seconds(SystemTime::now()),
                    level = record.level(),
                ))
            })
            .chain(std::io::stderr())
    };

    Dispatch::new()
        .level(level_filter)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(e.to_string()))?;

    info!(
        "Logger initialized: level={level_filter}, {}",
        config.file.as_deref().unwrap_or("stderr")
    );

    Ok(())
}
