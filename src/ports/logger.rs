/// Logger port - the only error surface of the page chrome.
///
/// Observer failures and mail client initialization failures end up here:
/// - WASM: browser console (console.log, console.error, ...)
/// - Native: stdout/stderr
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Start a console timer with the given label.
    fn time(&self, label: &str);

    /// Stop a console timer and log the elapsed duration.
    fn time_end(&self, label: &str);
}
