use super::converters;
use crate::adapters::wasm::{BrowserDom, GapiMailService};
use crate::domain::mail::{
    build_mail_observable, handle_client_load, MailClientConfig, MailServiceContext,
};
use crate::domain::page::{build_ui_observable, ClickEvent, PageConfig};
use crate::platform::Platform;
use crate::ports::{DomPort, MailServicePort};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Handle returned to the page once the listeners are attached.
#[wasm_bindgen]
pub struct MailChrome {
    mail: Rc<GapiMailService>,
}

#[wasm_bindgen]
impl MailChrome {
    #[wasm_bindgen(js_name = signIn)]
    pub fn sign_in(&self) -> Result<(), JsValue> {
        self.mail.sign_in().map_err(Into::into)
    }

    #[wasm_bindgen(js_name = signOut)]
    pub fn sign_out(&self) -> Result<(), JsValue> {
        self.mail.sign_out().map_err(Into::into)
    }

    #[wasm_bindgen(js_name = isSignedIn)]
    pub fn is_signed_in(&self) -> Result<bool, JsValue> {
        self.mail.is_signed_in().map_err(Into::into)
    }
}

/// Wires the page: one delegated click listener on the app root feeding the
/// UI observable, and the mail client started in the background.
///
/// Page configuration errors and a missing app root are returned to the
/// caller. Anything that goes wrong with the mail client is only logged.
#[wasm_bindgen(js_name = initListeners)]
pub fn init_listeners(page_config: JsValue, client_config: JsValue) -> Result<MailChrome, JsValue> {
    let platform = Platform::new();

    let page_config: PageConfig = converters::config_or_default(page_config)?;
    page_config.validate()?;

    let dom = Rc::new(BrowserDom::new()?);
    let root = dom.query_one(&page_config.app_root)?.ok_or_else(|| {
        converters::to_js_error(format!("no element matches '{}'", page_config.app_root))
    })?;

    let mail = Rc::new(GapiMailService::new(platform));
    let ui = build_ui_observable(platform, dom, Rc::new(page_config), mail.clone());

    let on_click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok());
        ui.notify_observers(&ClickEvent::from(target));
    }) as Box<dyn FnMut(web_sys::Event)>);
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    match converters::config_from_js::<MailClientConfig>(client_config) {
        Ok(config) => {
            let context =
                MailServiceContext::new(mail.clone(), Rc::new(build_mail_observable(platform)));
            spawn_local(async move {
                handle_client_load(&platform, &context, &config).await;
            });
        }
        Err(e) => platform
            .logger()
            .error(&format!("Mail client not started: {e}")),
    }

    Ok(MailChrome { mail })
}
