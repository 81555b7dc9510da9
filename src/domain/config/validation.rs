use super::error::ConfigError;

pub fn validate_not_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField(field));
    }
    Ok(())
}

/// A bare class name, as stored in `Element.classList` (no leading dot).
pub fn validate_class_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    validate_not_empty(field, value)?;
    if value.starts_with('.') || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClassName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A bare element id, as stored in `Element.id` (no leading `#`).
pub fn validate_id(field: &'static str, value: &str) -> Result<(), ConfigError> {
    validate_not_empty(field, value)?;
    if value.starts_with('#') || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidId {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn validate_selector(field: &'static str, value: &str) -> Result<(), ConfigError> {
    validate_not_empty(field, value)?;
    if value.trim() != value {
        return Err(ConfigError::InvalidSelector {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("clientId", "abc").is_ok());
        assert_eq!(
            validate_not_empty("clientId", "  "),
            Err(ConfigError::MissingField("clientId"))
        );
    }

    #[test]
    fn test_validate_class_name_valid() {
        assert!(validate_class_name("toggledClass", "nav-toggled").is_ok());
        assert!(validate_class_name("toggledClass", "mail_toggled2").is_ok());
    }

    #[test]
    fn test_validate_class_name_rejects_selectors_and_spaces() {
        assert!(validate_class_name("toggledClass", ".nav-toggled").is_err());
        assert!(validate_class_name("toggledClass", "nav toggled").is_err());
        assert!(validate_class_name("toggledClass", "").is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("signInTriggerId", "mail-signin").is_ok());
        assert_eq!(
            validate_id("signInTriggerId", "#mail-signin"),
            Err(ConfigError::InvalidId {
                field: "signInTriggerId",
                value: "#mail-signin".to_string(),
            })
        );
        assert!(validate_id("signInTriggerId", "mail signin").is_err());
        assert_eq!(
            validate_id("signInTriggerId", ""),
            Err(ConfigError::MissingField("signInTriggerId"))
        );
    }

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("appRoot", ".app").is_ok());
        assert!(validate_selector("mailMenuItem", ".nav-menu-items li:nth-child(2)").is_ok());
        assert!(validate_selector("appRoot", " .app").is_err());
        assert!(validate_selector("appRoot", "\t").is_err());
    }
}
