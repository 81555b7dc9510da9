pub mod error;
pub mod observable;

pub use error::ObserverError;
pub use observable::{DeliveryPolicy, NotifyReport, Observable, ObserverFailure};

/// A unit reacting to events broadcast by an [`Observable`].
///
/// Implementations hold no state between calls: whatever they need is read
/// from the event or from the live DOM.
pub trait Observer<E> {
    /// Name used when a failure is logged.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn update(&self, event: &E) -> Result<(), ObserverError> {
        let _ = event;
        Ok(())
    }
}
