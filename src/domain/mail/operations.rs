use super::error::MailServiceError;
use super::observers::SigninObserver;
use super::types::{MailClientConfig, SigninEvent};
use crate::domain::observer::Observable;
use crate::platform::Platform;
use crate::ports::MailServicePort;
use std::rc::Rc;

/// Everything the provider's sign-in listener needs, built once at startup
/// and handed to the listener explicitly.
#[derive(Clone)]
pub struct MailServiceContext {
    pub service: Rc<dyn MailServicePort>,
    pub observable: Rc<Observable<SigninEvent>>,
}

impl MailServiceContext {
    pub fn new(service: Rc<dyn MailServicePort>, observable: Rc<Observable<SigninEvent>>) -> Self {
        Self {
            service,
            observable,
        }
    }
}

/// Builds the mail-service observable with its single `SigninObserver`.
pub fn build_mail_observable(platform: Platform) -> Observable<SigninEvent> {
    let mut observable = Observable::new(platform);
    observable.add_observer(Rc::new(SigninObserver::new(platform)));
    observable
}

/// Initializes the provider client, then forwards every sign-in change to
/// the context's observable. The current state is delivered once right
/// after the listener is registered.
pub async fn start_mail_service(
    platform: &Platform,
    context: &MailServiceContext,
    config: &MailClientConfig,
) -> Result<(), MailServiceError> {
    config.validate()?;

    platform.logger().log("Initializing mail client");
    context.service.init(config).await?;

    let observable = context.observable.clone();
    context
        .service
        .listen_signed_in(Box::new(move |signed_in: bool| {
            observable.notify_observers(&SigninEvent::new(signed_in));
        }))?;

    let signed_in = context.service.is_signed_in()?;
    context
        .observable
        .notify_observers(&SigninEvent::new(signed_in));

    Ok(())
}

/// Startup entry point for the mail client. Failures are logged and the
/// sign-in feature stays inert; nothing is retried.
pub async fn handle_client_load(
    platform: &Platform,
    context: &MailServiceContext,
    config: &MailClientConfig,
) {
    if let Err(e) = start_mail_service(platform, context, config).await {
        platform.logger().error(&format!("{e}"));
    }
}
