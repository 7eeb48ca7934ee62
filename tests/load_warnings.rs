// tests/load_warnings.rs
use std::fs;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use price_machine::data::loader::load_directory;

/// Keeps every log line so tests can assert on skipped files.
struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn logged(level: Level, needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, msg)| *l == level && msg.contains(needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn missing_weight_column_is_warned_with_file_and_role() {
    install_logger();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("price_nowt_a.csv"), "товар,розница\nSalt,30\n").unwrap();
    fs::write(dir.path().join("price_ok_b.csv"), "товар,цена,вес\nTea,10,1\n").unwrap();

    let catalog = load_directory(dir.path(), "price");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name(), "Tea");

    let warnings = logged(Level::Warn, "price_nowt_a.csv");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("weight"));
    assert!(!warnings[0].contains("price ("));
    assert!(logged(Level::Warn, "price_ok_b.csv").is_empty());
}

#[test]
fn unreadable_directory_is_reported() {
    install_logger();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_prices_dir");

    let catalog = load_directory(&missing, "price");
    assert!(catalog.is_empty());
    assert_eq!(logged(Level::Error, "no_such_prices_dir").len(), 1);
}
