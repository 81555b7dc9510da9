/// WASM adapters - implementations using browser APIs.

pub mod browser_dom;
pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod gapi_mail;

pub use browser_dom::BrowserDom;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use gapi_mail::GapiMailService;
