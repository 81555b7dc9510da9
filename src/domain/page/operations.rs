use super::config::PageConfig;
use super::observers::{MailClickedObserver, MailToggleObserver, NavToggleObserver};
use super::types::ClickEvent;
use crate::domain::observer::Observable;
use crate::platform::Platform;
use crate::ports::{DomPort, MailServicePort};
use std::rc::Rc;

/// Builds the observable that receives every click on the application root.
///
/// Registration order is part of the contract:
/// 1. `NavToggleObserver` updates the menu toggles,
/// 2. `MailToggleObserver` derives popup visibility from those toggles,
/// 3. `MailClickedObserver` starts sign-in when the popup is clicked.
///
/// Swapping 1 and 2 would make the popup lag one click behind the menu.
pub fn build_ui_observable<D>(
    platform: Platform,
    dom: Rc<D>,
    config: Rc<PageConfig>,
    mail: Rc<dyn MailServicePort>,
) -> Observable<ClickEvent<D::Element>>
where
    D: DomPort + 'static,
    D::Element: 'static,
{
    let mut observable = Observable::new(platform);
    observable.add_observer(Rc::new(NavToggleObserver::new(dom.clone(), config.clone())));
    observable.add_observer(Rc::new(MailToggleObserver::new(dom.clone(), config.clone())));
    observable.add_observer(Rc::new(MailClickedObserver::new(dom, config, mail)));
    observable
}
