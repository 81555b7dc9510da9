use crate::domain::config::ConfigError;
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// Reads a configuration object, falling back to `T::default()` when JS
/// passed nothing.
pub fn config_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, ConfigError> {
    if is_absent(&value) {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| ConfigError::parse(format!("{:?}", e)))
}

pub fn config_from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, ConfigError> {
    if is_absent(&value) {
        return Err(ConfigError::parse("configuration is missing"));
    }
    from_value(value).map_err(|e| ConfigError::parse(format!("{:?}", e)))
}
