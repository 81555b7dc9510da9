use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailServiceError {
    InitFailed(String),
    NotInitialized,
    ListenerAlreadyRegistered,
    SignInFailed(String),
    SignOutFailed(String),
    ClientUnavailable(String),
}

impl fmt::Display for MailServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailServiceError::InitFailed(msg) => {
                write!(f, "Mail client initialization failed: {msg}")
            }
            MailServiceError::NotInitialized => write!(f, "Mail client is not initialized"),
            MailServiceError::ListenerAlreadyRegistered => {
                write!(f, "Sign-in listener is already registered")
            }
            MailServiceError::SignInFailed(msg) => write!(f, "Sign-in failed: {msg}"),
            MailServiceError::SignOutFailed(msg) => write!(f, "Sign-out failed: {msg}"),
            MailServiceError::ClientUnavailable(msg) => {
                write!(f, "Mail client unavailable: {msg}")
            }
        }
    }
}

impl std::error::Error for MailServiceError {}

impl MailServiceError {
    pub fn init_failed(message: impl Into<String>) -> Self {
        MailServiceError::InitFailed(message.into())
    }

    pub fn sign_in_failed(message: impl Into<String>) -> Self {
        MailServiceError::SignInFailed(message.into())
    }

    pub fn sign_out_failed(message: impl Into<String>) -> Self {
        MailServiceError::SignOutFailed(message.into())
    }

    pub fn client_unavailable(message: impl Into<String>) -> Self {
        MailServiceError::ClientUnavailable(message.into())
    }
}

impl From<MailServiceError> for crate::domain::observer::ObserverError {
    fn from(error: MailServiceError) -> Self {
        crate::domain::observer::ObserverError::mail_service(error.to_string())
    }
}

impl From<crate::domain::config::ConfigError> for MailServiceError {
    fn from(error: crate::domain::config::ConfigError) -> Self {
        MailServiceError::init_failed(error.to_string())
    }
}
