use crate::error::{CliError, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Opens the `--log-file` destination, creating missing parent directories the same way
/// generated scripts do.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path).map_err(CliError::Io)
}

/// Installs the global subscriber: compact console output on stderr, plus a plain-text file
/// layer when `log_file` is given. The file layer also records when each generation span closes.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file_layer = log_file
        .as_deref()
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
        });

    tracing_subscriber::registry()
        .with(level_for(verbosity, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .init();

    Ok(())
}
