use super::types::{SigninEvent, SigninState};
use crate::domain::observer::{Observer, ObserverError};
use crate::platform::Platform;

/// Reports sign-in transitions on the console.
pub struct SigninObserver {
    platform: Platform,
}

impl SigninObserver {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Observer<SigninEvent> for SigninObserver {
    fn name(&self) -> &str {
        "SigninObserver"
    }

    fn update(&self, event: &SigninEvent) -> Result<(), ObserverError> {
        match event.state() {
            SigninState::SignedIn => self.platform.logger().log("Mail: signed in"),
            SigninState::SignedOut => self.platform.logger().log("Mail: signed out"),
        }
        Ok(())
    }
}
