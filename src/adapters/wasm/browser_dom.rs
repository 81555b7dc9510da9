use super::error_conversions::describe_js_error;
use crate::domain::page::DomError;
use crate::ports::DomPort;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// DOM port over the live browser document.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Binds to the current window's document.
    pub fn new() -> Result<Self, DomError> {
        Ok(Self::from_document(crate::global::document()?))
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DomPort for BrowserDom {
    type Element = Element;

    fn query_one(&self, selector: &str) -> Result<Option<Element>, DomError> {
        self.document
            .query_selector(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| DomError::class_list_failed(describe_js_error(&e)))
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element
            .class_list()
            .remove_1(class)
            .map_err(|e| DomError::class_list_failed(describe_js_error(&e)))
    }

    fn element_id(&self, element: &Element) -> Option<String> {
        let id = element.id();
        (!id.is_empty()).then_some(id)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(dom: &BrowserDom, id: &str, class: &str) -> Element {
        let element = dom.document().create_element("li").unwrap();
        element.set_id(id);
        element.set_class_name(class);
        dom.document().body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_class_list_roundtrip() {
        let dom = BrowserDom::new().unwrap();
        let element = fixture(&dom, "browser-dom-classes", "browser-dom-item");

        dom.add_class(&element, "nav-toggled").unwrap();
        assert!(dom.has_class(&element, "nav-toggled"));

        dom.remove_class(&element, "nav-toggled").unwrap();
        assert!(!dom.has_class(&element, "nav-toggled"));

        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_queries() {
        let dom = BrowserDom::new().unwrap();
        let first = fixture(&dom, "browser-dom-first", "browser-dom-query");
        let second = fixture(&dom, "", "browser-dom-query");

        assert_eq!(dom.query_all(".browser-dom-query").unwrap().len(), 2);
        assert_eq!(
            dom.query_one("#browser-dom-first").unwrap(),
            Some(first.clone())
        );
        assert_eq!(dom.element_id(&second), None);
        assert!(matches!(
            dom.query_one("li:::"),
            Err(DomError::InvalidSelector(_))
        ));

        first.remove();
        second.remove();
    }
}
