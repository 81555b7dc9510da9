use super::error_conversions::describe_js_error;
use crate::domain::mail::{MailClientConfig, MailServiceError};
use crate::platform::Platform;
use crate::ports::{MailServicePort, SigninListener};
use async_trait::async_trait;
use js_sys::{Function, Promise};
use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

const CLIENT_LIBRARIES: &str = "client:auth2";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gapi, js_name = load, catch)]
    fn gapi_load(libraries: &str, callback: &Function) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["gapi", "client"], js_name = init, catch)]
    fn gapi_client_init(args: &JsValue) -> Result<JsValue, JsValue>;

    type GoogleAuth;

    #[wasm_bindgen(js_namespace = ["gapi", "auth2"], js_name = getAuthInstance, catch)]
    fn get_auth_instance() -> Result<GoogleAuth, JsValue>;

    #[wasm_bindgen(method, getter = isSignedIn)]
    fn is_signed_in(this: &GoogleAuth) -> SignedInState;

    #[wasm_bindgen(method, js_name = signIn, catch)]
    fn sign_in(this: &GoogleAuth) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = signOut, catch)]
    fn sign_out(this: &GoogleAuth) -> Result<JsValue, JsValue>;

    type SignedInState;

    #[wasm_bindgen(method)]
    fn get(this: &SignedInState) -> bool;

    #[wasm_bindgen(method)]
    fn listen(this: &SignedInState, listener: &Function);
}

/// Mail service backed by the Google API client (`gapi`).
///
/// The page must load `https://apis.google.com/js/api.js` before `init` is
/// called. Thenables returned by `gapi` are adopted into real promises
/// before being awaited.
pub struct GapiMailService {
    platform: Platform,
    initialized: Cell<bool>,
    listener: RefCell<Option<Closure<dyn Fn(bool)>>>,
}

impl GapiMailService {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            initialized: Cell::new(false),
            listener: RefCell::new(None),
        }
    }

    fn auth(&self) -> Result<GoogleAuth, MailServiceError> {
        if !self.initialized.get() {
            return Err(MailServiceError::NotInitialized);
        }
        let auth = get_auth_instance()
            .map_err(|e| MailServiceError::client_unavailable(describe_js_error(&e)))?;
        if auth.is_falsy() {
            return Err(MailServiceError::client_unavailable("no auth instance"));
        }
        Ok(auth)
    }

    /// Waits for a sign-in or sign-out promise in the background; the
    /// result reaches the page through the state listener.
    fn settle(&self, action: &'static str, pending: JsValue) {
        let platform = self.platform;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(Promise::resolve(&pending)).await {
                platform.logger().warn(&format!(
                    "{action} did not complete: {}",
                    describe_js_error(&e)
                ));
            }
        });
    }
}

async fn load_client_libraries() -> Result<(), JsValue> {
    let loaded = Promise::new(&mut |resolve, reject| {
        if let Err(e) = gapi_load(CLIENT_LIBRARIES, &resolve) {
            let _ = reject.call1(&JsValue::UNDEFINED, &e);
        }
    });
    JsFuture::from(loaded).await?;
    Ok(())
}

#[async_trait(?Send)]
impl MailServicePort for GapiMailService {
    async fn init(&self, config: &MailClientConfig) -> Result<(), MailServiceError> {
        load_client_libraries()
            .await
            .map_err(|e| MailServiceError::init_failed(describe_js_error(&e)))?;

        let args = serde_wasm_bindgen::to_value(config)
            .map_err(|e| MailServiceError::init_failed(format!("{:?}", e)))?;
        let pending = gapi_client_init(&args)
            .map_err(|e| MailServiceError::init_failed(describe_js_error(&e)))?;
        JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|e| MailServiceError::init_failed(describe_js_error(&e)))?;

        self.initialized.set(true);
        self.platform.logger().log("Mail client initialized");
        Ok(())
    }

    fn listen_signed_in(&self, listener: SigninListener) -> Result<(), MailServiceError> {
        let auth = self.auth()?;
        let mut slot = self.listener.borrow_mut();
        if slot.is_some() {
            return Err(MailServiceError::ListenerAlreadyRegistered);
        }

        let callback =
            Closure::wrap(Box::new(move |signed_in: bool| listener(signed_in)) as Box<dyn Fn(bool)>);
        auth.is_signed_in().listen(callback.as_ref().unchecked_ref());
        *slot = Some(callback);
        Ok(())
    }

    fn is_signed_in(&self) -> Result<bool, MailServiceError> {
        Ok(self.auth()?.is_signed_in().get())
    }

    fn sign_in(&self) -> Result<(), MailServiceError> {
        let pending = self
            .auth()?
            .sign_in()
            .map_err(|e| MailServiceError::sign_in_failed(describe_js_error(&e)))?;
        self.settle("Sign-in", pending);
        Ok(())
    }

    fn sign_out(&self) -> Result<(), MailServiceError> {
        let pending = self
            .auth()?
            .sign_out()
            .map_err(|e| MailServiceError::sign_out_failed(describe_js_error(&e)))?;
        self.settle("Sign-out", pending);
        Ok(())
    }
}
