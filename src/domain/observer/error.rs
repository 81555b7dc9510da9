use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    ElementNotFound(String),
    Dom(String),
    MailService(String),
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObserverError::ElementNotFound(selector) => {
                write!(f, "No element matches selector '{selector}'")
            }
            ObserverError::Dom(msg) => write!(f, "DOM error: {msg}"),
            ObserverError::MailService(msg) => write!(f, "Mail service error: {msg}"),
        }
    }
}

impl std::error::Error for ObserverError {}

impl ObserverError {
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        ObserverError::ElementNotFound(selector.into())
    }

    pub fn dom(message: impl Into<String>) -> Self {
        ObserverError::Dom(message.into())
    }

    pub fn mail_service(message: impl Into<String>) -> Self {
        ObserverError::MailService(message.into())
    }
}
