/// Native adapters - implementations for host builds and tests.

pub mod clock;
pub mod console_logger;
pub mod memory_dom;
pub mod offline_mail;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use memory_dom::{MemoryDom, NodeId};
pub use offline_mail::OfflineMailService;
