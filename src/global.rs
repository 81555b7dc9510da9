use crate::domain::page::DomError;
use web_sys::{Document, Window};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or_else(|| DomError::Unavailable("no global window".to_string()))
}

pub fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or_else(|| DomError::Unavailable("window has no document".to_string()))
}
