//! Basic tests for the default logger and macros

use lumber_logger::*;
use parking_lot::Mutex;
use serial_test::serial;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.lock())).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a capturing console logger as the default, once per test binary
fn capture() -> Capture {
    static CAPTURE: OnceLock<Capture> = OnceLock::new();
    CAPTURE
        .get_or_init(|| {
            let capture = Capture::default();
            init(Arc::new(ConsoleLogger::with_writer(
                capture.clone(),
                Level::Info,
            )))
            .expect("default logger already set");
            capture
        })
        .clone()
}

#[test]
#[serial]
fn test_macros() {
    let capture = capture();
    set_level(Level::Info);
    capture.take();

    fatal!("This is fatal");
    error!("This is an error");
    warn!("This is a warning");
    info!("The answer is {}", 42);
    debug!("This is debug (filtered at Info)");
    trace!("This is trace (filtered at Info)");

    let logs = capture.take();
    assert!(logs.contains("FATAL This is fatal\n"));
    assert!(logs.contains("ERROR This is an error\n"));
    assert!(logs.contains("WARN  This is a warning\n"));
    assert!(logs.contains("INFO  The answer is 42\n"));
    assert!(!logs.contains("debug"));
    assert!(!logs.contains("trace"));
    assert_eq!(logs.lines().count(), 4);
}

#[test]
#[serial]
fn test_forwarding_setters() {
    let capture = capture();
    capture.take();

    set_level(Level::Debug);
    set_prefix("main");
    set_time_format("%Y");
    debug!("visible now");
    log(Level::Trace, "still hidden");

    let logs = capture.take();
    assert!(logs.ends_with(" main DEBUG visible now\n"));
    assert_eq!(logs.lines().count(), 1);

    set_prefix("");
    set_time_format(DEFAULT_TIME_FORMAT);
    set_level(Level::Info);
}

#[test]
#[serial]
fn test_injected_handle_is_the_default() {
    let capture = capture();
    capture.take();

    let handle = logger();
    assert_eq!(handle.level(), Level::Info);
    assert!(!handle.is_enabled(Level::Debug));
    assert!(handle.is_enabled(Level::Error));

    handle.warn("through the handle").unwrap();
    assert!(capture.take().contains("WARN  through the handle"));
}

#[test]
#[serial]
fn test_second_init_fails() {
    capture();
    let result = init(Arc::new(ConsoleLogger::new(Level::Trace)));
    assert!(matches!(result, Err(Error::AlreadyInitialized)));
}
