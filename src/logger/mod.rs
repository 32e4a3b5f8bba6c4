use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::fmt::Write as FmtWrite;
use std::time::{SystemTime, UNIX_EPOCH};

/// Console logger writing to stderr, so the generated string can still be
/// piped from stdout by callers that want it.
pub struct EdsLogger;

impl log::Log for EdsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = record.args().to_string();
            eprintln!("{}", format_record(record.level(), record.target(), &message));
        }
    }

    fn flush(&self) {}
}

static LOGGER: EdsLogger = EdsLogger;

pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Maps repeated `-v` flags onto a level filter; info is the floor.
pub fn level_for_verbosity(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

const RESET: &str = "\x1b[0m";

fn format_record(level: Level, target: &str, message: &str) -> String {
    let color = match level {
        Level::Error => "\x1b[31m",
        Level::Warn => "\x1b[33m",
        Level::Info => "\x1b[32m",
        Level::Debug => "\x1b[36m",
        Level::Trace => "\x1b[35m",
    };
    let mut line = String::new();
    let _ = write!(line, "{}{} - {:<5} - ", color, clock_time(SystemTime::now()), level);
    // trace lines come from deep inside the recursion; tag where they came from
    if level == Level::Trace {
        let _ = write!(line, "[{}] ", target);
    }
    line.push_str(message);
    line.push_str(RESET);
    line
}

/// UTC wall-clock time of day as `HH:MM:SS.mmm`.
fn clock_time(now: SystemTime) -> String {
    let millis_of_day = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() % 86_400_000)
        .unwrap_or_default();
    let (seconds_of_day, millis) = (millis_of_day / 1000, millis_of_day % 1000);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        seconds_of_day / 3600,
        seconds_of_day / 60 % 60,
        seconds_of_day % 60,
        millis
    )
}
