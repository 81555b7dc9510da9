use crate::domain::page::DomError;

/// DOM port - the class-list primitives the page observers work with.
///
/// Elements are opaque handles owned by the adapter: `web_sys::Element` in
/// the browser, an index into an in-memory element list natively. Every call
/// reads the live state; adapters never cache class membership.
pub trait DomPort {
    type Element: Clone;

    /// First element matching `selector`, in document order.
    fn query_one(&self, selector: &str) -> Result<Option<Self::Element>, DomError>;

    /// Every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, DomError>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    /// The element's `id` attribute, if it has a non-empty one.
    fn element_id(&self, element: &Self::Element) -> Option<String>;
}
