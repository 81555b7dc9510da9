use super::config::PageConfig;
use super::error::DomError;
use super::types::ClickEvent;
use crate::domain::observer::{Observer, ObserverError};
use crate::ports::{DomPort, MailServicePort};
use std::rc::Rc;

/// Keeps at most one navigation menu item toggled.
///
/// Clicking an untoggled item toggles it and untoggles the others, clicking
/// the toggled item untoggles it, and clicking anywhere else closes the menu.
pub struct NavToggleObserver<D: DomPort> {
    dom: Rc<D>,
    config: Rc<PageConfig>,
}

impl<D: DomPort> NavToggleObserver<D> {
    pub fn new(dom: Rc<D>, config: Rc<PageConfig>) -> Self {
        Self { dom, config }
    }

    fn untoggle_all_menu_items(&self) -> Result<(), DomError> {
        for item in self.dom.query_all(&self.config.menu_item_selector())? {
            self.dom.remove_class(&item, &self.config.toggled_class)?;
        }
        Ok(())
    }
}

impl<D: DomPort> Observer<ClickEvent<D::Element>> for NavToggleObserver<D> {
    fn name(&self) -> &str {
        "NavToggleObserver"
    }

    fn update(&self, event: &ClickEvent<D::Element>) -> Result<(), ObserverError> {
        let toggled = &self.config.toggled_class;

        match event.target() {
            Some(target) if self.dom.has_class(target, &self.config.menu_item_class) => {
                if self.dom.has_class(target, toggled) {
                    self.dom.remove_class(target, toggled)?;
                } else {
                    self.untoggle_all_menu_items()?;
                    self.dom.add_class(target, toggled)?;
                }
            }
            _ => self.untoggle_all_menu_items()?,
        }

        Ok(())
    }
}

/// Shows the mail popup while the mail menu item is toggled.
///
/// Reads the state `NavToggleObserver` leaves behind, so it has to be
/// registered after it on the same observable.
pub struct MailToggleObserver<D: DomPort> {
    dom: Rc<D>,
    config: Rc<PageConfig>,
}

impl<D: DomPort> MailToggleObserver<D> {
    pub fn new(dom: Rc<D>, config: Rc<PageConfig>) -> Self {
        Self { dom, config }
    }

    fn require(&self, selector: &str) -> Result<D::Element, ObserverError> {
        self.dom
            .query_one(selector)?
            .ok_or_else(|| ObserverError::element_not_found(selector))
    }
}

impl<D: DomPort> Observer<ClickEvent<D::Element>> for MailToggleObserver<D> {
    fn name(&self) -> &str {
        "MailToggleObserver"
    }

    fn update(&self, _event: &ClickEvent<D::Element>) -> Result<(), ObserverError> {
        let mail_item = self.require(&self.config.mail_menu_item)?;
        let popup = self.require(&self.config.mail_popup)?;
        let visible = &self.config.mail_visible_class;

        if self.dom.has_class(&mail_item, &self.config.toggled_class) {
            self.dom.add_class(&popup, visible)?;
        } else {
            self.dom.remove_class(&popup, visible)?;
        }

        Ok(())
    }
}

/// Starts the mail provider's sign-in flow when the sign-in trigger is
/// clicked. Every click starts a new flow.
pub struct MailClickedObserver<D: DomPort> {
    dom: Rc<D>,
    config: Rc<PageConfig>,
    mail: Rc<dyn MailServicePort>,
}

impl<D: DomPort> MailClickedObserver<D> {
    pub fn new(dom: Rc<D>, config: Rc<PageConfig>, mail: Rc<dyn MailServicePort>) -> Self {
        Self { dom, config, mail }
    }

    fn is_sign_in_trigger(&self, target: &D::Element) -> bool {
        if self.dom.has_class(target, &self.config.sign_in_trigger_class) {
            return true;
        }

        match (&self.config.sign_in_trigger_id, self.dom.element_id(target)) {
            (Some(trigger_id), Some(id)) => *trigger_id == id,
            _ => false,
        }
    }
}

impl<D: DomPort> Observer<ClickEvent<D::Element>> for MailClickedObserver<D> {
    fn name(&self) -> &str {
        "MailClickedObserver"
    }

    fn update(&self, event: &ClickEvent<D::Element>) -> Result<(), ObserverError> {
        match event.target() {
            Some(target) if self.is_sign_in_trigger(target) => {
                self.mail.sign_in()?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
