pub mod error;
pub mod observers;
pub mod operations;
pub mod types;

pub use error::MailServiceError;
pub use observers::SigninObserver;
pub use operations::{
    build_mail_observable, handle_client_load, start_mail_service, MailServiceContext,
};
pub use types::{MailClientConfig, SigninEvent, SigninState};
