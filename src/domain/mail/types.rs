use crate::domain::config::validation::validate_not_empty;
use crate::domain::config::ConfigError;
use serde::{Deserialize, Serialize};

pub const GMAIL_DISCOVERY_DOC: &str = "https://www.googleapis.com/discovery/v1/apis/gmail/v1/rest";
pub const GMAIL_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/gmail.readonly";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigninState {
    SignedOut,
    SignedIn,
}

/// A sign-in status change reported by the mail provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigninEvent {
    pub signed_in: bool,
}

impl SigninEvent {
    pub fn new(signed_in: bool) -> Self {
        Self { signed_in }
    }

    pub fn state(&self) -> SigninState {
        if self.signed_in {
            SigninState::SignedIn
        } else {
            SigninState::SignedOut
        }
    }
}

impl From<bool> for SigninEvent {
    fn from(signed_in: bool) -> Self {
        Self::new(signed_in)
    }
}

/// Initialization parameters handed to the provider client.
///
/// Field names serialize to the keys `gapi.client.init` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailClientConfig {
    pub client_id: String,
    pub api_key: String,
    #[serde(default = "default_discovery_docs")]
    pub discovery_docs: Vec<String>,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_discovery_docs() -> Vec<String> {
    vec![GMAIL_DISCOVERY_DOC.to_string()]
}

fn default_scope() -> String {
    GMAIL_READONLY_SCOPE.to_string()
}

impl MailClientConfig {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            discovery_docs: default_discovery_docs(),
            scope: default_scope(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MailClientConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_not_empty("clientId", &self.client_id)?;
        validate_not_empty("apiKey", &self.api_key)?;
        validate_not_empty("scope", &self.scope)?;
        for doc in &self.discovery_docs {
            validate_not_empty("discoveryDocs", doc)?;
        }
        Ok(())
    }
}
