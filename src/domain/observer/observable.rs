use super::{Observer, ObserverError};
use crate::platform::Platform;
use std::rc::Rc;

/// What happens to the rest of a notification pass when an observer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Log the failure and keep delivering to the remaining observers.
    #[default]
    BestEffort,
    /// Log the failure and skip every observer registered after it.
    FailFast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverFailure {
    pub observer: String,
    pub error: ObserverError,
}

/// Outcome of one notification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Observers whose `update` was invoked, failed ones included.
    pub delivered: usize,
    pub failures: Vec<ObserverFailure>,
}

impl NotifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered, append-only list of observers sharing one event type.
///
/// Observers are notified synchronously in registration order. Registering
/// the same observer twice makes it run twice per pass.
pub struct Observable<E> {
    platform: Platform,
    policy: DeliveryPolicy,
    observers: Vec<Rc<dyn Observer<E>>>,
}

impl<E> Observable<E> {
    pub fn new(platform: Platform) -> Self {
        Self::with_policy(platform, DeliveryPolicy::default())
    }

    pub fn with_policy(platform: Platform, policy: DeliveryPolicy) -> Self {
        Self {
            platform,
            policy,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer<E>>) {
        self.observers.push(observer);
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify_observers(&self, event: &E) -> NotifyReport {
        crate::time_it!(self.platform, "notify_observers", self.deliver(event))
    }

    fn deliver(&self, event: &E) -> NotifyReport {
        let mut report = NotifyReport::default();

        for observer in &self.observers {
            report.delivered += 1;

            if let Err(error) = observer.update(event) {
                self.platform.logger().error(&format!(
                    "Observer {} failed: {}",
                    observer.name(),
                    error
                ));
                report.failures.push(ObserverFailure {
                    observer: observer.name().to_string(),
                    error,
                });

                if self.policy == DeliveryPolicy::FailFast {
                    let skipped = self.observers.len() - report.delivered;
                    if skipped > 0 {
                        self.platform
                            .logger()
                            .warn(&format!("Skipped {skipped} observer(s) after failure"));
                    }
                    break;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        label: &'static str,
        calls: Rc<RefCell<Vec<(&'static str, u32)>>>,
    }

    impl Observer<u32> for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn update(&self, event: &u32) -> Result<(), ObserverError> {
            self.calls.borrow_mut().push((self.label, *event));
            Ok(())
        }
    }

    struct Failing;

    impl Observer<u32> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn update(&self, _event: &u32) -> Result<(), ObserverError> {
            Err(ObserverError::dom("boom"))
        }
    }

    struct Silent;

    impl Observer<u32> for Silent {}

    fn recorder(
        label: &'static str,
        calls: &Rc<RefCell<Vec<(&'static str, u32)>>>,
    ) -> Rc<dyn Observer<u32>> {
        Rc::new(Recorder {
            label,
            calls: calls.clone(),
        })
    }

    #[test]
    fn test_notify_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new(Platform::new());
        observable.add_observer(recorder("first", &calls));
        observable.add_observer(recorder("second", &calls));
        observable.add_observer(recorder("third", &calls));

        let report = observable.notify_observers(&7);

        assert!(report.is_clean());
        assert_eq!(report.delivered, 3);
        assert_eq!(
            *calls.borrow(),
            vec![("first", 7), ("second", 7), ("third", 7)]
        );
    }

    #[test]
    fn test_duplicate_observer_runs_twice() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let shared = recorder("dup", &calls);
        let mut observable = Observable::new(Platform::new());
        observable.add_observer(shared.clone());
        observable.add_observer(shared);

        assert_eq!(observable.len(), 2);
        observable.notify_observers(&1);

        assert_eq!(*calls.borrow(), vec![("dup", 1), ("dup", 1)]);
    }

    #[test]
    fn test_empty_observable_delivers_nothing() {
        let observable: Observable<u32> = Observable::new(Platform::new());
        assert!(observable.is_empty());

        let report = observable.notify_observers(&0);
        assert_eq!(report, NotifyReport::default());
    }

    #[test]
    fn test_default_update_is_noop() {
        let mut observable = Observable::new(Platform::new());
        observable.add_observer(Rc::new(Silent));

        let report = observable.notify_observers(&3);
        assert!(report.is_clean());
        assert_eq!(report.delivered, 1);
    }

    #[test]
    fn test_best_effort_continues_after_failure() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new(Platform::new());
        assert_eq!(observable.policy(), DeliveryPolicy::BestEffort);
        observable.add_observer(recorder("before", &calls));
        observable.add_observer(Rc::new(Failing));
        observable.add_observer(recorder("after", &calls));

        let report = observable.notify_observers(&5);

        assert_eq!(report.delivered, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].observer, "failing");
        assert_eq!(*calls.borrow(), vec![("before", 5), ("after", 5)]);
    }

    #[test]
    fn test_fail_fast_stops_after_failure() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::with_policy(Platform::new(), DeliveryPolicy::FailFast);
        observable.add_observer(recorder("before", &calls));
        observable.add_observer(Rc::new(Failing));
        observable.add_observer(recorder("after", &calls));

        let report = observable.notify_observers(&5);

        assert_eq!(report.delivered, 2);
        assert_eq!(
            report.failures,
            vec![ObserverFailure {
                observer: "failing".to_string(),
                error: ObserverError::dom("boom"),
            }]
        );
        assert_eq!(*calls.borrow(), vec![("before", 5)]);
    }
}
