pub mod config;
pub mod error;
pub mod observers;
pub mod operations;
pub mod types;

pub use config::PageConfig;
pub use error::DomError;
pub use observers::{MailClickedObserver, MailToggleObserver, NavToggleObserver};
pub use operations::build_ui_observable;
pub use types::ClickEvent;
