use std::io::{self, Write as _};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Local;
use console::{style, Color};
use log::LevelFilter;

/// A simple logger
pub struct Logger;

static LOGGER: Logger = Logger;
static MAX_LEVEL: AtomicUsize = AtomicUsize::new(LevelFilter::Warn as usize);

pub fn max_level() -> LevelFilter {
    match MAX_LEVEL.load(Ordering::Relaxed) {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn set_max_level(level: LevelFilter) {
    MAX_LEVEL.store(level as usize, Ordering::Relaxed);
    log::set_max_level(level);
}

/// Installs the logger unless another logger is installed already, and
/// sets the max level either way.
pub fn init(level: LevelFilter) {
    log::set_logger(&LOGGER).ok();
    set_max_level(level);
}

fn level_label(level: log::Level) -> (&'static str, Color) {
    match level {
        log::Level::Error => ("ERROR", Color::Red),
        log::Level::Warn => ("WARN ", Color::Red),
        log::Level::Info => ("INFO ", Color::Cyan),
        log::Level::Debug => ("DEBUG", Color::Yellow),
        log::Level::Trace => ("TRACE", Color::Magenta),
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (level_name, level_color) = level_label(record.level());
        let short_target = record.target().split("::").next().unwrap_or("");
        let msg = format!(
            "{} {} {}{}",
            style(format!("  {level_name}  ")).bg(level_color).black(),
            style(Local::now()).dim(),
            style(record.args()),
            style(if short_target != "zendesk_support_requests" {
                format!("  (from {short_target})")
            } else {
                String::new()
            })
            .dim(),
        );

        writeln!(io::stderr(), "{msg}").ok();
    }

    fn flush(&self) {}
}
