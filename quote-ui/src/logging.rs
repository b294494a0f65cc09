//! Tracing setup for the quote calculator.
//!
//! Two layers sit under one reloadable level filter: stdout, which is
//! switched off while the terminal UI owns the screen, and a file layer
//! that discards everything until [`enable_file_logging`] points it at a
//! file.

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, reload};

// --- Formatter ---

/// `<local time> <LEVEL> <module>: <fields>`, dimmed and coloured on a tty.
struct QuoteFmt;

fn level_colour(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for QuoteFmt
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
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let target = meta.target().trim_start_matches("quote_");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{stamp}\x1b[0m {}{:>5}\x1b[0m \x1b[36m{target}\x1b[0m: ",
                level_colour(*meta.level()),
                meta.level(),
            )?;
        } else {
            write!(writer, "{stamp} {:>5} {target}: ", meta.level())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    // A panic while holding the lock leaves the file itself usable.
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_file(&self.0))
    }
}

// --- Statics ---

type SetBoolFn = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

static SET_STDOUT_ENABLED: OnceLock<SetBoolFn> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();

/// `RUST_LOG` when set and valid, otherwise `level`, otherwise `info`.
fn make_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

// --- Public API ---

/// Initializes logging. Call once at startup; later calls are ignored.
///
/// `level` is a bare level ("warn", "debug", ...) or any `EnvFilter`
/// directive and applies unless `RUST_LOG` is set.
pub fn init_logging(level: &str) {
    let slot: SharedFile = Arc::new(Mutex::new(None));

    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(QuoteFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(QuoteFmt)
        .with_ansi(false)
        .with_writer(FileSlot(slot.clone()));

    let installed = tracing_subscriber::registry()
        .with(make_filter(level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        let _ = FILE_SLOT.set(slot);
        let _ = SET_STDOUT_ENABLED.set(Box::new(move |enabled: bool| {
            let gate = if enabled { "trace" } else { "off" };
            stdout_handle
                .reload(EnvFilter::new(gate))
                .map_err(|e| anyhow!("stdout reload failed: {e}"))
        }));
    }
}

/// Shows or hides stdout log output without affecting file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    match SET_STDOUT_ENABLED.get() {
        Some(set) => set(enabled),
        None => bail!("logging not yet initialized"),
    }
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match FILE_SLOT.get() {
        Some(slot) => {
            *lock_file(slot) = Some(file);
            Ok(())
        }
        None => bail!("logging not yet initialized"),
    }
}
