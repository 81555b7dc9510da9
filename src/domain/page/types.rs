/// A click delivered to the application root.
///
/// `target` is the element the click landed on. It is `None` when the
/// browser reports a target that is not an element (a text node, the
/// document itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent<E> {
    target: Option<E>,
}

impl<E> ClickEvent<E> {
    pub fn on(target: E) -> Self {
        Self {
            target: Some(target),
        }
    }

    pub fn without_target() -> Self {
        Self { target: None }
    }

    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }
}

impl<E> From<Option<E>> for ClickEvent<E> {
    fn from(target: Option<E>) -> Self {
        Self { target }
    }
}
