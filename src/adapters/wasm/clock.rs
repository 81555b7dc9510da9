use crate::ports::ClockPort;
use web_sys::Performance;

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn performance(&self) -> Option<Performance> {
        web_sys::window().and_then(|window| window.performance())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        self.performance().map(|perf| perf.now()).unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        self.performance().is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_available_in_browser() {
        let clock = Clock::new();
        assert!(clock.is_available(), "Clock should be available");
        assert!(clock.now() >= 0.0);
    }
}
