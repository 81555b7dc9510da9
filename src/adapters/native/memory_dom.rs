use crate::domain::page::DomError;
use crate::ports::DomPort;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Handle to an element of a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct MemoryElement {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
}

/// In-memory stand-in for the browser document.
///
/// Elements are kept in insertion order, which is also the document order
/// queries report. Selectors are limited to a single `.class`, `#id` or
/// tag name; anything else is rejected with `UnsupportedSelector`.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: RefCell<Vec<MemoryElement>>,
}

enum SimpleSelector<'a> {
    Class(&'a str),
    Id(&'a str),
    Tag(&'a str),
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_selector(selector: &str) -> Result<SimpleSelector<'_>, DomError> {
    if selector.trim().is_empty() {
        return Err(DomError::InvalidSelector(selector.to_string()));
    }

    let (parsed, name) = if let Some(class) = selector.strip_prefix('.') {
        (SimpleSelector::Class(class), class)
    } else if let Some(id) = selector.strip_prefix('#') {
        (SimpleSelector::Id(id), id)
    } else {
        (SimpleSelector::Tag(selector), selector)
    };

    if !is_identifier(name) {
        return Err(DomError::UnsupportedSelector(selector.to_string()));
    }
    Ok(parsed)
}

impl MemoryElement {
    fn matches(&self, selector: &SimpleSelector<'_>) -> bool {
        match selector {
            SimpleSelector::Class(class) => self.classes.contains(*class),
            SimpleSelector::Id(id) => self.id.as_deref() == Some(*id),
            SimpleSelector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
        }
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element at the end of the document.
    pub fn append(&self, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(MemoryElement {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        });
        NodeId(elements.len() - 1)
    }

    pub fn classes(&self, element: NodeId) -> Vec<String> {
        self.elements
            .borrow()
            .get(element.0)
            .map(|e| e.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn with_element<R>(
        &self,
        element: &NodeId,
        f: impl FnOnce(&mut MemoryElement) -> R,
    ) -> Result<R, DomError> {
        self.elements
            .borrow_mut()
            .get_mut(element.0)
            .map(f)
            .ok_or_else(|| DomError::class_list_failed(format!("unknown element {}", element.0)))
    }
}

impl DomPort for MemoryDom {
    type Element = NodeId;

    fn query_one(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.matches(&selector))
            .map(|(index, _)| NodeId(index))
            .collect())
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.elements
            .borrow()
            .get(element.0)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        self.with_element(element, |e| {
            e.classes.insert(class.to_string());
        })
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        self.with_element(element, |e| {
            e.classes.remove(class);
        })
    }

    fn element_id(&self, element: &NodeId) -> Option<String> {
        self.elements
            .borrow()
            .get(element.0)
            .and_then(|e| e.id.clone())
            .filter(|id| !id.is_empty())
    }
}
