//! Logging setup: a console layer plus JSON file layers, one per configured
//! subsystem.
//!
//! Every key of [`LoggingConfig`] other than `"default"` names a target prefix
//! (usually a crate, e.g. `marriage_registry` or `tower_http`). Records of such
//! a target go to that section's console level and file; everything else is
//! handled by the `"default"` section.

use std::{
    collections::HashMap,
    io::{IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{
    filter::{FilterFn, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

use crate::config::{LoggingConfig, Section};

const DEFAULT_SECTION: &str = "default";
const DEFAULT_MAX_SIZE_MB: u64 = 100;
const DEFAULT_MAX_BACKUPS: usize = 3;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

// -------- level helpers --------

/// `None` means the output is switched off; unknown names fall back to INFO.
fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

/// Returns true if target == prefix or target starts with "prefix::"
fn matches_crate_prefix(target: &str, prefix: &str) -> bool {
    target
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Records not claimed by any explicit subsystem, up to `max_level`.
fn unclaimed_filter(
    claimed: Vec<String>,
    max_level: Level,
) -> FilterFn<impl Fn(&tracing::Metadata<'_>) -> bool> {
    FilterFn::new(move |meta: &tracing::Metadata<'_>| {
        meta.level() <= &max_level
            && !claimed
                .iter()
                .any(|prefix| matches_crate_prefix(meta.target(), prefix))
    })
}

// -------- rotating file writers --------

#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RotWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log writer lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log writer lock poisoned"))?
            .flush()
    }
}

/// Writer that drops everything when no file is configured for a record.
struct MaybeWriter(Option<RotWriter>);

impl Write for MaybeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.0 {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.0 {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Route log records to different files by target prefix.
#[derive(Clone, Default)]
struct FileRouter {
    default: Option<RotWriter>,
    by_prefix: HashMap<String, RotWriter>,
}

impl FileRouter {
    fn resolve_for(&self, target: &str) -> Option<RotWriter> {
        self.by_prefix
            .iter()
            .find(|(prefix, _)| matches_crate_prefix(target, prefix))
            .map(|(_, w)| w.clone())
            .or_else(|| self.default.clone())
    }
}

impl<'a> fmt::MakeWriter<'a> for FileRouter {
    type Writer = MaybeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MaybeWriter(self.default.clone())
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        MaybeWriter(self.resolve_for(meta.target()))
    }
}

/// Resolve a log file path against `base_dir` (home_dir).
/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Open a size-rotated log file, creating its parent directory.
fn create_rotating_writer(section: &Section, log_path: &Path) -> std::io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let max_bytes = section.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB) * 1024 * 1024;
    let max_files = section.max_backups.unwrap_or(DEFAULT_MAX_BACKUPS);

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(FileLimit::MaxFiles(max_files)),
        ContentLimit::BytesSurpassed(max_bytes as usize),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

/// `None` when the section has no file or the file cannot be opened.
fn file_writer_for(name: &str, section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }
    let log_path = resolve_log_path(&section.file, base_dir);
    match create_rotating_writer(section, &log_path) {
        Ok(writer) => Some(writer),
        Err(e) => {
            // The subscriber is not installed yet, so stderr is the only channel.
            eprintln!(
                "Failed to open log file for '{}': {} ({})",
                name,
                log_path.display(),
                e
            );
            None
        }
    }
}

// -------- layer assembly --------

fn console_layer<F>(ansi: bool, filter: F) -> BoxedLayer
where
    F: tracing_subscriber::layer::Filter<Registry> + Send + Sync + 'static,
{
    fmt::layer()
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(filter)
        .boxed()
}

fn json_file_layer<F>(router: FileRouter, filter: F) -> BoxedLayer
where
    F: tracing_subscriber::layer::Filter<Registry> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_current_span(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(router)
        .with_filter(filter)
        .boxed()
}

fn build_layers(cfg: &LoggingConfig, base_dir: &Path, ansi: bool) -> Vec<BoxedLayer> {
    let explicit: Vec<(&String, &Section)> = cfg
        .iter()
        .filter(|(name, _)| name.as_str() != DEFAULT_SECTION)
        .collect();
    let claimed: Vec<String> = explicit.iter().map(|(name, _)| (*name).clone()).collect();

    let mut router = FileRouter::default();
    let mut console_targets = Targets::new().with_default(LevelFilter::OFF);
    let mut file_targets = Targets::new().with_default(LevelFilter::OFF);

    for (name, section) in &explicit {
        if let Some(level) = parse_tracing_level(&section.console_level) {
            console_targets = console_targets.with_target(name.as_str(), LevelFilter::from_level(level));
        }
        if let Some(writer) = file_writer_for(name, section, base_dir) {
            router.by_prefix.insert((*name).clone(), writer);
            if let Some(level) = parse_tracing_level(&section.file_level) {
                file_targets = file_targets.with_target(name.as_str(), LevelFilter::from_level(level));
            }
        }
    }

    let default_section = cfg.get(DEFAULT_SECTION);
    if let Some(section) = default_section {
        router.default = file_writer_for(DEFAULT_SECTION, section, base_dir);
    }

    let mut layers = Vec::new();
    if !explicit.is_empty() {
        layers.push(console_layer(ansi, console_targets));
        if !router.by_prefix.is_empty() {
            layers.push(json_file_layer(router.clone(), file_targets));
        }
    }

    if let Some(section) = default_section {
        if let Some(level) = parse_tracing_level(&section.console_level) {
            layers.push(console_layer(ansi, unclaimed_filter(claimed.clone(), level)));
        }
        if router.default.is_some() {
            if let Some(level) = parse_tracing_level(&section.file_level) {
                layers.push(json_file_layer(router, unclaimed_filter(claimed, level)));
            }
        }
    }

    layers
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: LoggingConfig containing the logging sections
/// - `base_dir`: base directory used to resolve relative log file paths (usually server.home_dir)
///
/// Installing a second global subscriber is silently ignored.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        let _ = tracing_subscriber::fmt()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .try_init();
        return;
    }

    let ansi = std::io::stdout().is_terminal();
    let layers = build_layers(cfg, base_dir, ansi);
    let _ = Registry::default().with(layers).try_init();
}

// =================== tests ===================
