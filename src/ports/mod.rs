/// Ports module - the traits separating the page logic from the browser.
///
/// Each port has one adapter per target (see `crate::adapters`), so the
/// observers and the startup wiring run unchanged in host tests.

pub mod clock;
pub mod dom;
pub mod logger;
pub mod mail_service;

pub use clock::ClockPort;
pub use dom::DomPort;
pub use logger::LoggerPort;
pub use mail_service::{MailServicePort, SigninListener};
