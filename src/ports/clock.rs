/// Port for timing notification passes in debug mode
pub trait ClockPort: Send + Sync {
    /// Current timestamp in milliseconds
    fn now(&self) -> f64;

    /// Whether a timing source is available on this target
    fn is_available(&self) -> bool;
}
