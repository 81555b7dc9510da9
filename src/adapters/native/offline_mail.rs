use crate::domain::mail::{MailClientConfig, MailServiceError};
use crate::ports::{MailServicePort, SigninListener};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Native mail service adapter.
///
/// The provider client only exists in the browser, so the sign-in state
/// lives in memory: `sign_in`/`sign_out` flip it immediately and the
/// listener fires on every transition, the way the provider reports them.
#[derive(Default)]
pub struct OfflineMailService {
    init_failure: Option<String>,
    initialized: Cell<bool>,
    signed_in: Cell<bool>,
    sign_in_requests: Cell<usize>,
    listener: RefCell<Option<Rc<dyn Fn(bool)>>>,
}

impl OfflineMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose `init` always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            init_failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// Number of `sign_in` calls, successful or not.
    pub fn sign_in_requests(&self) -> usize {
        self.sign_in_requests.get()
    }

    /// Simulates a change made outside the page, such as the session
    /// expiring.
    ///
    /// The listener runs with no borrow held, so it may call back into
    /// the service.
    pub fn set_signed_in(&self, signed_in: bool) {
        if self.signed_in.replace(signed_in) != signed_in {
            let listener = self.listener.borrow().clone();
            if let Some(listener) = listener {
                listener(signed_in);
            }
        }
    }

    fn ensure_initialized(&self) -> Result<(), MailServiceError> {
        if self.initialized.get() {
            Ok(())
        } else {
            Err(MailServiceError::NotInitialized)
        }
    }
}

#[async_trait(?Send)]
impl MailServicePort for OfflineMailService {
    async fn init(&self, config: &MailClientConfig) -> Result<(), MailServiceError> {
        if let Some(reason) = &self.init_failure {
            return Err(MailServiceError::init_failed(reason.clone()));
        }
        config.validate()?;
        self.initialized.set(true);
        Ok(())
    }

    fn listen_signed_in(&self, listener: SigninListener) -> Result<(), MailServiceError> {
        self.ensure_initialized()?;
        let mut slot = self.listener.borrow_mut();
        if slot.is_some() {
            return Err(MailServiceError::ListenerAlreadyRegistered);
        }
        *slot = Some(Rc::from(listener));
        Ok(())
    }

    fn is_signed_in(&self) -> Result<bool, MailServiceError> {
        self.ensure_initialized()?;
        Ok(self.signed_in.get())
    }

    fn sign_in(&self) -> Result<(), MailServiceError> {
        self.sign_in_requests.set(self.sign_in_requests.get() + 1);
        self.ensure_initialized()?;
        self.set_signed_in(true);
        Ok(())
    }

    fn sign_out(&self) -> Result<(), MailServiceError> {
        self.ensure_initialized()?;
        self.set_signed_in(false);
        Ok(())
    }
}
