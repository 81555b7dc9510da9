use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    InvalidSelector(String),
    UnsupportedSelector(String),
    ClassListFailed(String),
    Unavailable(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::InvalidSelector(selector) => write!(f, "Invalid selector: {selector}"),
            DomError::UnsupportedSelector(selector) => {
                write!(f, "Selector not supported by this DOM: {selector}")
            }
            DomError::ClassListFailed(msg) => write!(f, "Class list update failed: {msg}"),
            DomError::Unavailable(msg) => write!(f, "Document unavailable: {msg}"),
        }
    }
}

impl std::error::Error for DomError {}

impl DomError {
    pub fn class_list_failed(message: impl Into<String>) -> Self {
        DomError::ClassListFailed(message.into())
    }
}

impl From<DomError> for crate::domain::observer::ObserverError {
    fn from(error: DomError) -> Self {
        crate::domain::observer::ObserverError::dom(error.to_string())
    }
}
