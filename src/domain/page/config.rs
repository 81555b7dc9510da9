use crate::domain::config::validation::{validate_class_name, validate_id, validate_selector};
use crate::domain::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Selectors and class names the page observers act on.
///
/// Class fields are bare class names; selector fields are CSS selectors.
/// `mail_menu_item` addresses the mail entry of the navigation menu by a
/// stable selector. Pages whose markup has no id there can still configure
/// a positional selector such as `.nav-menu-items li:nth-child(2)`; the
/// browser DOM resolves any CSS selector.
///
/// `mail_popup` and `sign_in_trigger_class` are independent settings. They
/// name the same element by default, but changing the popup selector leaves
/// the sign-in trigger where it was; set both when the popup markup moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub app_root: String,
    pub menu_item_class: String,
    pub toggled_class: String,
    pub mail_menu_item: String,
    pub mail_popup: String,
    pub mail_visible_class: String,
    pub sign_in_trigger_class: String,
    pub sign_in_trigger_id: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            app_root: ".app".to_string(),
            menu_item_class: "nav-menu-item".to_string(),
            toggled_class: "nav-toggled".to_string(),
            mail_menu_item: "#nav-mail-item".to_string(),
            mail_popup: ".mail-popup".to_string(),
            mail_visible_class: "mail-toggled".to_string(),
            sign_in_trigger_class: "mail-popup".to_string(),
            sign_in_trigger_id: None,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_selector("appRoot", &self.app_root)?;
        validate_class_name("menuItemClass", &self.menu_item_class)?;
        validate_class_name("toggledClass", &self.toggled_class)?;
        validate_selector("mailMenuItem", &self.mail_menu_item)?;
        validate_selector("mailPopup", &self.mail_popup)?;
        validate_class_name("mailVisibleClass", &self.mail_visible_class)?;
        validate_class_name("signInTriggerClass", &self.sign_in_trigger_class)?;
        if let Some(id) = &self.sign_in_trigger_id {
            validate_id("signInTriggerId", id)?;
        }
        Ok(())
    }

    /// Selector matching every navigation menu item.
    pub fn menu_item_selector(&self) -> String {
        format!(".{}", self.menu_item_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.menu_item_selector(), ".nav-menu-item");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PageConfig::from_json(r#"{ "signInTriggerId": "mail-signin" }"#).unwrap();
        assert_eq!(config.app_root, ".app");
        assert_eq!(config.toggled_class, "nav-toggled");
        assert_eq!(config.sign_in_trigger_id.as_deref(), Some("mail-signin"));
    }

    #[test]
    fn test_from_json_accepts_positional_selector() {
        let config =
            PageConfig::from_json(r#"{ "mailMenuItem": ".nav-menu-items li:nth-child(2)" }"#)
                .unwrap();
        assert_eq!(config.mail_menu_item, ".nav-menu-items li:nth-child(2)");
    }

    #[test]
    fn test_from_json_rejects_dotted_class() {
        let result = PageConfig::from_json(r#"{ "toggledClass": ".nav-toggled" }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidClassName {
                field: "toggledClass",
                ..
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_hash_prefixed_trigger_id() {
        let result = PageConfig::from_json(r##"{ "signInTriggerId": "#mail-signin" }"##);
        assert_eq!(
            result,
            Err(ConfigError::InvalidId {
                field: "signInTriggerId",
                value: "#mail-signin".to_string(),
            })
        );
    }

    #[test]
    fn test_popup_and_sign_in_trigger_are_configured_separately() {
        let config = PageConfig::from_json(r##"{ "mailPopup": "#inbox-popup" }"##).unwrap();
        assert_eq!(config.mail_popup, "#inbox-popup");
        assert_eq!(config.sign_in_trigger_class, "mail-popup");

        let config = PageConfig::from_json(
            r#"{ "mailPopup": ".inbox-popup", "signInTriggerClass": "inbox-popup" }"#,
        )
        .unwrap();
        assert_eq!(config.mail_popup, ".inbox-popup");
        assert_eq!(config.sign_in_trigger_class, "inbox-popup");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = PageConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
