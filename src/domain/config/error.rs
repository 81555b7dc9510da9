use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidClassName { field: &'static str, value: String },
    InvalidSelector { field: &'static str, value: String },
    InvalidId { field: &'static str, value: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(field) => {
                write!(f, "Configuration field '{field}' cannot be empty")
            }
            ConfigError::InvalidClassName { field, value } => {
                write!(f, "Configuration field '{field}' is not a class name: '{value}'")
            }
            ConfigError::InvalidSelector { field, value } => {
                write!(f, "Configuration field '{field}' is not a selector: '{value}'")
            }
            ConfigError::InvalidId { field, value } => {
                write!(f, "Configuration field '{field}' is not an element id: '{value}'")
            }
            ConfigError::Parse(msg) => write!(f, "Failed to parse configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::Parse(message.into())
    }
}
