use crate::ports::LoggerPort;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
    Time,
    TimeEnd,
}

/// Logger that keeps every message in memory instead of printing it.
///
/// Used by tests to observe what the page reported, on both targets.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger with `'static` lifetime, as `Platform` requires.
    pub fn leak() -> &'static RecordingLogger {
        Box::leak(Box::new(Self::new()))
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.at(Level::Log)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::Error)
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl LoggerPort for RecordingLogger {
    fn log(&self, message: &str) {
        self.push(Level::Log, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn time(&self, label: &str) {
        self.push(Level::Time, label);
    }

    fn time_end(&self, label: &str) {
        self.push(Level::TimeEnd, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_kept_apart() {
        let logger = RecordingLogger::new();
        logger.log("a");
        logger.warn("b");
        logger.error("c");
        logger.time("t");
        logger.time_end("t");

        assert_eq!(logger.logs(), vec!["a".to_string()]);
        assert_eq!(logger.warnings(), vec!["b".to_string()]);
        assert_eq!(logger.errors(), vec!["c".to_string()]);
        assert_eq!(logger.entries().len(), 5);

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
