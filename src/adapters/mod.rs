/// Adapters module - platform-specific implementations of ports.

pub mod global_clock;
pub mod global_logger;
pub mod recording_logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::{BrowserDom, ConsoleLogger, GapiMailService};
#[cfg(not(target_arch = "wasm32"))]
pub use native::{ConsoleLogger, MemoryDom, NodeId, OfflineMailService};

pub use global_clock::clock;
pub use global_logger::logger;
pub use recording_logger::RecordingLogger;
