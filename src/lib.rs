// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod global;
pub mod measure;

pub use domain::mail::{MailClientConfig, MailServiceContext, SigninEvent, SigninState};
pub use domain::observer::{DeliveryPolicy, NotifyReport, Observable, Observer, ObserverError};
pub use domain::page::{ClickEvent, PageConfig};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
