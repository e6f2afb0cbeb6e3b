use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- File formatter ---

/// One line per event: local timestamp, level, source location, fields.
struct TimestampedFmt;

impl<S, N> FormatEvent<S, N> for TimestampedFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(
            writer,
            "{} {:>5} ",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"),
            meta.level()
        )?;

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Filter ---

/// Builds the level filter.
///
/// A `RUST_LOG` value wins over the configured level so a run can be
/// debugged without editing the config file.
fn build_filter(
    rust_log: Option<String>,
    level: &str,
) -> Result<EnvFilter> {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid RUST_LOG directives '{directives}'")),
        _ => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'")),
    }
}

// --- Public API ---

/// Initializes logging. Call once at startup.
///
/// - Stderr: compact, no timestamps or targets, colored when attached to a
///   terminal. Stdout is left to the command's own output.
/// - File: when `log_file` is given, timestamped records are appended to it.
pub fn init_logging(
    level: &str,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), level)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(TimestampedFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}
