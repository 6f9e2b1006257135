use bias_core::{Family, IdRegistry};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static RECORDS: Lazy<Mutex<Vec<(Level, String)>>> = Lazy::new(Default::default);

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

fn install() {
    // Only the first call in this binary succeeds.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
}

fn warnings_mentioning(needle: &str) -> Vec<String> {
    RECORDS
        .lock()
        .iter()
        .filter(|(level, message)| *level == Level::Warn && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}

#[test]
fn overwrite_is_logged_at_warn() {
    install();
    let registry = IdRegistry::new();
    let family = Family::custom("WarnedShortcut");

    registry.register_id(&family, 5, "FIRST");
    assert!(warnings_mentioning("WarnedShortcut").is_empty());

    registry.register_id(&family, 5, "SECOND");
    let warnings = warnings_mentioning("WarnedShortcut");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("id 5"), "{}", warnings[0]);
    assert!(warnings[0].contains("FIRST"), "{}", warnings[0]);
    assert_eq!(registry.description(&family, 5).as_deref(), Some("SECOND"));
}

#[test]
fn strict_registration_does_not_warn() {
    install();
    let registry = IdRegistry::new();
    let family = Family::custom("QuietShortcut");

    registry.try_register_id(&family, 1, "ONE").unwrap();
    assert!(registry.try_register_id(&family, 1, "AGAIN").is_err());
    assert!(warnings_mentioning("QuietShortcut").is_empty());
}
