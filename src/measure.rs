use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Turns console timers around notification passes on or off.
#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

#[macro_export]
macro_rules! time_it {
    ($platform:expr, $label:expr, $block:expr) => {{
        let platform: &$crate::platform::Platform = &$platform;
        let timed = $crate::measure::is_debug_mode() && platform.clock().is_available();
        if timed {
            platform.logger().time($label);
        }
        let result = $block;
        if timed {
            platform.logger().time_end($label);
        }
        result
    }};
}

pub use crate::time_it;
