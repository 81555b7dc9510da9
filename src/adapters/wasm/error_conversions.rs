use crate::domain::config::ConfigError;
use crate::domain::mail::MailServiceError;
use crate::domain::page::DomError;
use wasm_bindgen::JsValue;

/// Best-effort text for a value thrown or rejected by JavaScript.
///
/// The mail provider rejects with plain objects (`{ error, details }`),
/// DOM calls throw `DOMException`s, and scripts may throw strings.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    for key in ["details", "message", "error"] {
        if let Ok(value) = js_sys::Reflect::get(err, &JsValue::from_str(key)) {
            if let Some(text) = value.as_string() {
                return text;
            }
        }
    }
    "Unknown JavaScript error".to_string()
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<MailServiceError> for JsValue {
    fn from(error: MailServiceError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(error: ConfigError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
