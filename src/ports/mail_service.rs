use crate::domain::mail::{MailClientConfig, MailServiceError};
use async_trait::async_trait;

/// Callback invoked by the provider with the new signed-in flag.
pub type SigninListener = Box<dyn Fn(bool)>;

/// Port for the third-party mail provider's sign-in client.
///
/// Single-threaded: browser handles are not `Send`, so unlike the logger
/// this port carries no `Send + Sync` bound.
#[async_trait(?Send)]
pub trait MailServicePort {
    /// Load and initialize the provider client. Must complete before any
    /// other call.
    async fn init(&self, config: &MailClientConfig) -> Result<(), MailServiceError>;

    /// Register the sign-in state listener. Called once per page.
    fn listen_signed_in(&self, listener: SigninListener) -> Result<(), MailServiceError>;

    fn is_signed_in(&self) -> Result<bool, MailServiceError>;

    /// Start the provider's sign-in flow. Returns once the flow is started;
    /// the outcome arrives through the listener.
    fn sign_in(&self) -> Result<(), MailServiceError>;

    fn sign_out(&self) -> Result<(), MailServiceError>;
}
